//! HTTP helpers for the survey API with consistent timeouts and error handling.
//! Feature clients use these helpers to avoid duplicating request setup and to
//! enforce a predictable timeout policy. The helpers do not store tokens; they
//! only attach the bearer header provided by callers.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Wrapper for the `{ "data": ... }` payload convention used by the
/// collection and singular resource endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Fetches JSON from a bearer-authenticated endpoint.
pub async fn get_json_with_bearer<T: DeserializeOwned>(
    path: &str,
    token: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let authorization = bearer_value(token);
    let response = send_with_timeout(move |signal| {
        Request::get(&url)
            .header("Accept", "application/json")
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON without authentication and parses a JSON response. Used by the
/// credential-exchange and password-reset endpoints.
pub async fn post_json_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON with a bearer header and parses a JSON response.
pub async fn post_json_with_bearer_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let authorization = bearer_value(token);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Puts JSON with a bearer header and parses a JSON response.
pub async fn put_json_with_bearer_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let authorization = bearer_value(token);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::put(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Puts JSON with a bearer header, ignoring the response body.
pub async fn put_json_with_bearer<B: Serialize>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<(), AppError> {
    let url = build_url(path);
    let authorization = bearer_value(token);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::put(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Posts an empty body with a bearer header, ignoring the response body.
/// Used to invalidate a session.
pub async fn post_empty_with_bearer(path: &str, token: &str) -> Result<(), AppError> {
    let url = build_url(path);
    let authorization = bearer_value(token);
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Accept", "application/json")
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .body("")
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Posts an empty body with a bearer header and parses a JSON response.
pub async fn post_empty_with_bearer_response<T: DeserializeOwned>(
    path: &str,
    token: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let authorization = bearer_value(token);
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Accept", "application/json")
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .body("")
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Issues a DELETE with a bearer header and expects an empty response body.
pub async fn delete_with_bearer(path: &str, token: &str) -> Result<(), AppError> {
    let url = build_url(path);
    let authorization = bearer_value(token);
    let response = send_with_timeout(move |signal| {
        Request::delete(&url)
            .header("Accept", "application/json")
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with the server message
/// when the body carries one.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: http_error_message(body),
        })
    }
}

/// Handles empty responses and returns normalized HTTP errors when needed.
async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: http_error_message(body),
        })
    }
}

/// Extracts the `message` field from a structured error body, falling back to
/// the sanitized raw body.
fn http_error_message(body: String) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(message) = value.get("message").and_then(|field| field.as_str()) {
            let trimmed = message.trim();
            if !trimmed.is_empty() {
                return trimmed.chars().take(MAX_ERROR_CHARS).collect();
            }
        }
    }

    sanitize_body(body)
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Envelope, build_url_with_base, http_error_message, sanitize_body};

    #[test]
    fn build_url_with_base_joins_segments_once() {
        assert_eq!(
            build_url_with_base("http://127.0.0.1:8000/api/v1", "/surveys"),
            "http://127.0.0.1:8000/api/v1/surveys"
        );
        assert_eq!(
            build_url_with_base("http://127.0.0.1:8000/api/v1/", "surveys"),
            "http://127.0.0.1:8000/api/v1/surveys"
        );
        assert_eq!(build_url_with_base("", "/login"), "/login");
    }

    #[test]
    fn http_error_message_prefers_the_structured_message() {
        let body = r#"{"message":"These credentials do not match our records."}"#.to_string();
        assert_eq!(
            http_error_message(body),
            "These credentials do not match our records."
        );
    }

    #[test]
    fn http_error_message_falls_back_to_the_raw_body() {
        assert_eq!(
            http_error_message("<html>Bad Gateway</html>".to_string()),
            "<html>Bad Gateway</html>"
        );
        assert_eq!(
            http_error_message(r#"{"message":"   "}"#.to_string()),
            r#"{"message":"   "}"#
        );
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body(String::new()), "Request failed.");
        assert_eq!(sanitize_body("  oops  ".to_string()), "oops");

        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).len(), 200);
    }

    #[test]
    fn envelope_unwraps_collection_payloads() {
        let payload = r#"{"data":[1,2,3]}"#;
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(payload).expect("envelope should decode");
        assert_eq!(envelope.data, vec![1, 2, 3]);
    }
}
