//! Session state and context for the frontend. The provider seeds state from
//! the durable snapshot before the first render, then revalidates once in the
//! background. All mutations go through [`SessionContext`] methods, which
//! update the in-memory signals and the persisted snapshot in the same step so
//! readers never observe the two out of sync. The context never navigates;
//! callers react to outcomes and drive the router themselves.

use crate::{
    app_lib::AppError,
    features::auth::{
        client, storage,
        types::{
            ForgotPasswordRequest, LoginRequest, LoginResponse, ResetPasswordRequest,
            SessionRecord, StatusMessage,
        },
    },
};
use leptos::{prelude::*, task::spawn_local};

/// Whether the verification flag has been confirmed against the live server
/// during this page lifetime. A restored snapshot starts out stale; only one
/// revalidation may be in flight at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Revalidation {
    Stale,
    InFlight,
    Confirmed,
}

/// Session context shared through Leptos.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Option<SessionRecord>>,
    pub email_verified: RwSignal<bool>,
    pub(crate) revalidation: RwSignal<Revalidation>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    fn new() -> Self {
        let session = RwSignal::new(None);
        let email_verified = RwSignal::new(false);
        let revalidation = RwSignal::new(Revalidation::Stale);
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            email_verified,
            revalidation,
            is_authenticated,
        }
    }

    /// The bearer token, read reactively. Domain features treat it as opaque.
    pub fn token(&self) -> Option<String> {
        self.session.get().map(|record| record.token)
    }

    /// Seeds in-memory state from the durable snapshot without revalidating.
    fn adopt_snapshot(&self) {
        if let Some(snapshot) = storage::read_snapshot() {
            self.session.set(Some(snapshot.record));
            self.email_verified.set(snapshot.email_verified);
        }
    }

    /// Replaces the session record and verification flag together, in memory
    /// and in storage.
    fn save_session(&self, record: SessionRecord, email_verified: bool) {
        storage::write_snapshot(&record, email_verified);
        self.session.set(Some(record));
        self.email_verified.set(email_verified);
    }

    /// Clears all session state, in memory and in storage.
    pub fn clear_session(&self) {
        storage::clear_snapshot();
        self.session.set(None);
        self.email_verified.set(false);
        self.revalidation.set(Revalidation::Stale);
    }

    /// Exchanges credentials for a session. On failure the current state is
    /// left untouched. Navigation after a successful login is the caller's
    /// explicit step.
    pub async fn login(&self, email: String, password: String) -> Result<(), AppError> {
        let request = LoginRequest { email, password };
        let response = client::login(&request).await.map_err(login_failure)?;
        let (record, email_verified) = session_from_login(response);
        self.save_session(record, email_verified);
        // The exchange response carries the live verification timestamp.
        self.revalidation.set(Revalidation::Confirmed);
        Ok(())
    }

    /// Invalidates the token best-effort and unconditionally clears state.
    /// Never fails visibly; callers redirect to the login route afterwards.
    pub async fn logout(&self) {
        if let Some(record) = self.session.get_untracked() {
            let _ = client::logout(&record.token).await;
        }
        self.clear_session();
    }

    /// Adopts the durable snapshot and refreshes the verification flag from
    /// the live identity record. A missing snapshot is a silent no-op. A
    /// failed revalidation clears all session state and re-raises, because
    /// the caller must treat it as a forced logout.
    pub async fn restore_auth(&self) -> Result<(), AppError> {
        if self.revalidation.get_untracked() == Revalidation::InFlight {
            return Ok(());
        }
        let Some(snapshot) = storage::read_snapshot() else {
            return Ok(());
        };

        self.revalidation.set(Revalidation::InFlight);
        self.session.set(Some(snapshot.record.clone()));
        self.email_verified.set(snapshot.email_verified);

        match client::fetch_user(snapshot.record.user_id, &snapshot.record.token).await {
            Ok(user) => {
                let email_verified = user.email_verified_at.is_some();
                storage::write_snapshot(&snapshot.record, email_verified);
                self.email_verified.set(email_verified);
                self.revalidation.set(Revalidation::Confirmed);
                Ok(())
            }
            Err(_) => {
                self.clear_session();
                Err(AppError::SessionExpired(
                    "Your session has expired. Please sign in again.".to_string(),
                ))
            }
        }
    }

    /// Recomputes the verification flag from the live identity record and
    /// persists it. Without a token this is an early return. On failure the
    /// flag is forced to `false`, persisted, and the failure propagated.
    pub async fn check_verification_status(&self) -> Result<bool, AppError> {
        let Some(record) = self.session.get_untracked() else {
            return Ok(false);
        };

        match client::fetch_user(record.user_id, &record.token).await {
            Ok(user) => {
                let email_verified = user.email_verified_at.is_some();
                storage::write_snapshot(&record, email_verified);
                self.email_verified.set(email_verified);
                Ok(email_verified)
            }
            Err(err) => {
                storage::write_snapshot(&record, false);
                self.email_verified.set(false);
                Err(err)
            }
        }
    }

    /// Requests a fresh verification email for the signed-in identity.
    pub async fn send_verification_email(&self) -> Result<StatusMessage, AppError> {
        let Some(record) = self.session.get_untracked() else {
            return Err(AppError::Verification(
                "Sign in to request a verification email.".to_string(),
            ));
        };

        client::send_verification_email(&record.token)
            .await
            .map_err(verification_failure)
    }

    /// Starts the password-reset flow. Unauthenticated.
    pub async fn forgot_password(&self, email: String) -> Result<StatusMessage, AppError> {
        let request = ForgotPasswordRequest { email };
        client::forgot_password(&request).await.map_err(reset_failure)
    }

    /// Completes the password-reset flow with the emailed token.
    pub async fn reset_password(
        &self,
        request: ResetPasswordRequest,
    ) -> Result<StatusMessage, AppError> {
        client::reset_password(&request).await.map_err(reset_failure)
    }
}

/// Builds the session record and verification flag from a login response.
/// The flag is set iff the server reports a verification timestamp.
fn session_from_login(response: LoginResponse) -> (SessionRecord, bool) {
    let email_verified = response.user.email_verified_at.is_some();
    let record = SessionRecord {
        token: response.token,
        user_id: response.user.id,
        message: response.message,
    };
    (record, email_verified)
}

fn login_failure(err: AppError) -> AppError {
    match err {
        AppError::Http { message, .. } => AppError::Authentication(message),
        other => other,
    }
}

fn verification_failure(err: AppError) -> AppError {
    match err {
        AppError::Http { message, .. } => AppError::Verification(message),
        other => other,
    }
}

fn reset_failure(err: AppError) -> AppError {
    match err {
        AppError::Http { message, .. } => AppError::PasswordReset(message),
        other => other,
    }
}

/// Provides the session context and revalidates the restored session once.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new();
    session.adopt_snapshot();
    provide_context(session);

    spawn_local(async move {
        // A failed background revalidation degrades to signed-out; the guard
        // redirects on the next protected navigation.
        let _ = session.restore_auth().await;
    });

    view! { {children()} }
}

/// Returns the current session context or a fallback empty context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::new)
}

#[cfg(test)]
mod tests {
    use super::{login_failure, session_from_login};
    use crate::{
        app_lib::AppError,
        features::auth::types::{AuthUser, LoginResponse},
    };

    fn response(email_verified_at: Option<&str>) -> LoginResponse {
        LoginResponse {
            token: "abc".to_string(),
            user: AuthUser {
                id: 7,
                email: Some("a@b.c".to_string()),
                email_verified_at: email_verified_at.map(str::to_string),
            },
            message: None,
        }
    }

    #[test]
    fn unverified_login_yields_a_false_flag() {
        let (record, email_verified) = session_from_login(response(None));
        assert_eq!(record.token, "abc");
        assert_eq!(record.user_id, 7);
        assert!(!email_verified);
    }

    #[test]
    fn verified_login_yields_a_true_flag() {
        let (_, email_verified) = session_from_login(response(Some("2025-01-01T00:00:00Z")));
        assert!(email_verified);
    }

    #[test]
    fn login_failure_surfaces_the_server_message() {
        let err = AppError::Http {
            status: 401,
            message: "These credentials do not match our records.".to_string(),
        };
        assert_eq!(
            login_failure(err),
            AppError::Authentication("These credentials do not match our records.".to_string())
        );

        let err = AppError::Timeout("Request timed out. Please try again.".to_string());
        assert_eq!(
            login_failure(err.clone()),
            AppError::Timeout("Request timed out. Please try again.".to_string())
        );
    }
}
