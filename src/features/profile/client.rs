//! Client wrappers for the identity endpoints used by the profile view.

use crate::{
    app_lib::{AppError, get_json_with_bearer, put_json_with_bearer},
    features::profile::types::{UpdateProfilePayload, UserProfile},
};

/// Fetches the identity record by id. Unwrapped response.
pub async fn fetch_user(user_id: u64, token: &str) -> Result<UserProfile, AppError> {
    get_json_with_bearer(&format!("/users/{user_id}"), token).await
}

/// Updates the identity record. Callers refetch the profile afterwards.
pub async fn update_profile(payload: &UpdateProfilePayload, token: &str) -> Result<(), AppError> {
    put_json_with_bearer("/users", payload, token).await
}
