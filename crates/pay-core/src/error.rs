//! # Payment Error Types
//!
//! Typed error handling for the payment proxy.
//! All gateway operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Client-facing message when `email` or `amount` is absent.
pub const MISSING_INITIALIZE_FIELDS: &str = "Email and amount are required.";

/// Client-facing message when `amount` is present but not numeric.
pub const INVALID_AMOUNT: &str = "Amount must be a number.";

/// Client-facing message when the verify path carries no reference.
pub const MISSING_REFERENCE: &str = "Transaction reference is required.";

/// Client-facing message when the verify path segment cannot be decoded.
pub const INVALID_REFERENCE: &str = "Transaction reference is invalid.";

/// Client-facing message when the bearer credential is absent.
pub const MISSING_SECRET_KEY: &str = "Paystack secret key is not configured.";

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Missing or malformed client input
    #[error("{0}")]
    Validation(String),

    /// Configuration errors (missing keys, invalid config)
    #[error("{0}")]
    Configuration(String),

    /// Network/HTTP error communicating with provider, including timeouts
    #[error("Network error: {0}")]
    Network(String),

    /// Payment provider answered with a non-success status
    #[error("Provider error [{provider}] HTTP {status}: {message}")]
    Provider {
        provider: String,
        status: u16,
        message: String,
    },

    /// Provider answered 2xx but the body was not a usable envelope
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

impl PaymentError {
    /// Shorthand for a validation error with a static message
    pub fn validation(message: impl Into<String>) -> Self {
        PaymentError::Validation(message.into())
    }

    /// Returns true if the failure happened talking to the upstream API
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            PaymentError::Network(_)
                | PaymentError::Provider { .. }
                | PaymentError::MalformedResponse(_)
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Validation(_) => 400,
            PaymentError::Configuration(_) => 500,
            PaymentError::Network(_) => 500,
            PaymentError::Provider { .. } => 500,
            PaymentError::MalformedResponse(_) => 500,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_errors() {
        assert!(PaymentError::Network("timeout".into()).is_upstream());
        assert!(PaymentError::Provider {
            provider: "paystack".into(),
            status: 400,
            message: "Invalid key".into(),
        }
        .is_upstream());
        assert!(PaymentError::MalformedResponse("no data".into()).is_upstream());
        assert!(!PaymentError::validation(MISSING_REFERENCE).is_upstream());
        assert!(!PaymentError::Configuration(MISSING_SECRET_KEY.into()).is_upstream());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PaymentError::validation(MISSING_INITIALIZE_FIELDS).status_code(),
            400
        );
        assert_eq!(
            PaymentError::Configuration(MISSING_SECRET_KEY.into()).status_code(),
            500
        );
        assert_eq!(
            PaymentError::Provider {
                provider: "paystack".into(),
                status: 404,
                message: "Transaction reference not found".into(),
            }
            .status_code(),
            500
        );
    }

    #[test]
    fn test_client_facing_messages_are_unprefixed() {
        assert_eq!(
            PaymentError::validation(MISSING_INITIALIZE_FIELDS).to_string(),
            "Email and amount are required."
        );
        assert_eq!(
            PaymentError::Configuration(MISSING_SECRET_KEY.into()).to_string(),
            "Paystack secret key is not configured."
        );
    }
}
