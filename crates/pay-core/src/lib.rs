//! # pay-core
//!
//! Core types and traits for the Paystack proxy.
//!
//! This crate provides:
//! - `PaymentGateway` trait for implementing payment providers
//! - `InitializeRequest`, `InitializeTransaction`, and `TransactionReference`
//!   for validated client input
//! - `TransactionData` for the opaque provider payload
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{InitializeRequest, PaymentGateway};
//!
//! let transaction = request.validate()?;
//! let data = gateway.initialize_transaction(&transaction).await?;
//!
//! // Relay data.authorization_url to the client
//! ```

pub mod error;
pub mod gateway;
pub mod transaction;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use transaction::{
    Amount, InitializeRequest, InitializeTransaction, TransactionData, TransactionOperation,
    TransactionReference,
};
