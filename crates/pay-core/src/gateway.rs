//! # Payment Gateway Trait
//!
//! Seam between the HTTP layer and the payment provider.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            PaymentGateway (trait)            │
//! │  ├── initialize_transaction()                │
//! │  ├── verify_transaction()                    │
//! │  └── provider_name()                         │
//! └──────────────────────────────────────────────┘
//!                        ▲
//!                ┌───────┴───────┐
//!                │PaystackGateway│
//!                └───────────────┘
//! ```

use crate::error::PaymentResult;
use crate::transaction::{InitializeTransaction, TransactionData, TransactionReference};
use async_trait::async_trait;
use std::sync::Arc;

/// A payment provider the proxy forwards to.
///
/// Every call performs at most one request against the provider and either
/// yields the provider's `data` payload or an error. Implementations must
/// fail with `PaymentError::Configuration` without contacting the provider
/// when their credential is absent.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Start a transaction and return the provider's payload
    /// (authorization URL, access code, reference).
    async fn initialize_transaction(
        &self,
        transaction: &InitializeTransaction,
    ) -> PaymentResult<TransactionData>;

    /// Look up the status of a transaction by reference.
    async fn verify_transaction(
        &self,
        reference: &TransactionReference,
    ) -> PaymentResult<TransactionData>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
