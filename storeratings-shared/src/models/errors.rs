use serde::{Deserialize, Serialize};

/// Error payload the API returns on rejected requests.
///
/// `message` is the only key the server promises; anything else in the body
/// is ignored.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong.
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_display() {
        let error = ErrorResponse::new("Email already registered");
        assert_eq!(error.to_string(), "Email already registered");
    }

    #[test]
    fn error_response_ignores_extra_keys() {
        let error: ErrorResponse =
            serde_json::from_str(r#"{"message":"Invalid credentials","code":401}"#).unwrap();
        assert_eq!(error.message, "Invalid credentials");
    }

    #[test]
    fn error_response_requires_message() {
        assert!(serde_json::from_str::<ErrorResponse>(r#"{"detail":"nope"}"#).is_err());
    }

    #[test]
    fn error_response_as_error_trait() {
        let error = ErrorResponse::new("Rating failed");
        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.to_string().contains("Rating failed"));
    }
}
