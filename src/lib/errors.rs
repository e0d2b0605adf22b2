use std::fmt;

/// Errors surfaced to the UI. Transport variants carry a normalized
/// description; the auth-flow variants carry the server-supplied message when
/// one was present, otherwise a generic fallback chosen at the call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    Authentication(String),
    SessionExpired(String),
    Verification(String),
    PasswordReset(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            // Auth-flow messages are already user-facing; no prefix.
            AppError::Authentication(message)
            | AppError::SessionExpired(message)
            | AppError::Verification(message)
            | AppError::PasswordReset(message) => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn transport_errors_carry_a_prefix() {
        let error = AppError::Network("connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: connection refused");

        let error = AppError::Http {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(error.to_string(), "Request failed (503): unavailable");
    }

    #[test]
    fn auth_flow_errors_display_the_message_verbatim() {
        let error = AppError::Authentication("Invalid credentials".to_string());
        assert_eq!(error.to_string(), "Invalid credentials");

        let error = AppError::SessionExpired("Your session has expired.".to_string());
        assert_eq!(error.to_string(), "Your session has expired.");
    }
}
