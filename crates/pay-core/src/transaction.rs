//! # Transaction Types
//!
//! Request shapes accepted from clients, their validated forms, and the
//! opaque payload relayed back from the provider.

use crate::error::{
    PaymentError, PaymentResult, INVALID_AMOUNT, MISSING_INITIALIZE_FIELDS, MISSING_REFERENCE,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Initialize request as sent by the client.
///
/// Fields are optional so that an absent field surfaces as a validation
/// error instead of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct InitializeRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub amount: Option<Value>,
}

impl InitializeRequest {
    /// Validate into an [`InitializeTransaction`]
    pub fn validate(self) -> PaymentResult<InitializeTransaction> {
        let email = self
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        let amount = match self.amount {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(other) => Some(other),
        };

        let (Some(email), Some(amount)) = (email, amount) else {
            return Err(PaymentError::validation(MISSING_INITIALIZE_FIELDS));
        };

        Ok(InitializeTransaction {
            email,
            amount: Amount::try_from(amount)?,
        })
    }
}

/// Transaction amount, forwarded to the provider exactly as received.
///
/// The provider accepts the amount (in the currency's subunit) either as a
/// JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    Number(serde_json::Number),
    Text(String),
}

impl TryFrom<Value> for Amount {
    type Error = PaymentError;

    fn try_from(value: Value) -> PaymentResult<Self> {
        match value {
            Value::Number(n) => Ok(Amount::Number(n)),
            Value::String(s) if s.trim().parse::<f64>().is_ok_and(f64::is_finite) => {
                Ok(Amount::Text(s.trim().to_string()))
            }
            _ => Err(PaymentError::validation(INVALID_AMOUNT)),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{}", n),
            Amount::Text(s) => f.write_str(s),
        }
    }
}

/// Validated initialize request, serialized as the provider request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitializeTransaction {
    pub email: String,
    pub amount: Amount,
}

/// Provider-issued transaction reference taken from the request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReference(String);

impl TransactionReference {
    /// Parse a raw path segment; blank references are rejected.
    pub fn parse(raw: &str) -> PaymentResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PaymentError::validation(MISSING_REFERENCE));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque `data` object from the provider envelope, relayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionData(pub Value);

impl TransactionData {
    /// Look up a top-level string field (for logging)
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }
}

/// The two proxied operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOperation {
    Initialize,
    Verify,
}

impl TransactionOperation {
    /// Generic message returned to clients when the provider call fails
    pub fn failure_message(self) -> &'static str {
        match self {
            TransactionOperation::Initialize => "Transaction initialization failed",
            TransactionOperation::Verify => "Transaction verification failed",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionOperation::Initialize => "initialize",
            TransactionOperation::Verify => "verify",
        }
    }
}
