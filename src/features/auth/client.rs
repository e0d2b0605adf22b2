//! Client wrappers for the auth API endpoints. These helpers centralize paths
//! and bearer handling, keeping auth flows consistent and preventing token
//! leakage in route code.

use crate::{
    app_lib::{
        AppError, get_json_with_bearer, post_empty_with_bearer, post_empty_with_bearer_response,
        post_json_response,
    },
    features::auth::types::{
        AuthUser, ForgotPasswordRequest, LoginRequest, LoginResponse, ResetPasswordRequest,
        StatusMessage,
    },
};

/// Exchanges credentials for a bearer token and the identity summary.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    post_json_response("/login", request).await
}

/// Invalidates the bearer token on the server.
pub async fn logout(token: &str) -> Result<(), AppError> {
    post_empty_with_bearer("/logout", token).await
}

/// Fetches the identity record by id. The response is the user object
/// unwrapped, with the live `email_verified_at` timestamp.
pub async fn fetch_user(user_id: u64, token: &str) -> Result<AuthUser, AppError> {
    get_json_with_bearer(&format!("/users/{user_id}"), token).await
}

/// Asks the server to send a fresh verification email to the current identity.
pub async fn send_verification_email(token: &str) -> Result<StatusMessage, AppError> {
    post_empty_with_bearer_response("/email/verification-notification", token).await
}

/// Starts the password-reset flow for an email address. Unauthenticated.
pub async fn forgot_password(request: &ForgotPasswordRequest) -> Result<StatusMessage, AppError> {
    post_json_response("/forgot-password", request).await
}

/// Completes the password-reset flow with the emailed token. Unauthenticated.
pub async fn reset_password(request: &ResetPasswordRequest) -> Result<StatusMessage, AppError> {
    post_json_response("/reset-password", request).await
}
