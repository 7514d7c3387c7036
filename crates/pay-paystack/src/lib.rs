//! # pay-paystack
//!
//! Paystack payment gateway for the Paystack proxy.
//!
//! `PaystackGateway` implements `pay_core::PaymentGateway` on top of the
//! Paystack Transactions API:
//!
//! - `POST /transaction/initialize` - start a transaction, returns the
//!   authorization URL and reference
//! - `GET /transaction/verify/{reference}` - look up transaction status
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_paystack::PaystackGateway;
//! use pay_core::{InitializeRequest, PaymentGateway};
//!
//! // Create gateway from environment (PAYSTACK_SECRET_KEY)
//! let gateway = PaystackGateway::from_env()?;
//!
//! let transaction = request.validate()?;
//! let data = gateway.initialize_transaction(&transaction).await?;
//!
//! // Redirect user to data["authorization_url"]
//! ```

pub mod config;
pub mod gateway;

// Re-exports
pub use config::PaystackConfig;
pub use gateway::PaystackGateway;
