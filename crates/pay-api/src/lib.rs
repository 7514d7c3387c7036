//! # pay-api
//!
//! HTTP API layer for the Paystack proxy.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Proxy endpoints that keep the Paystack secret key server-side
//! - CORS allow-list and request tracing middleware
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/health` | Health check |
//! | GET | `/api/test` | Liveness probe |
//! | POST | `/api/initialize-transaction` | Initialize a transaction |
//! | GET | `/api/verify-transaction/{reference}` | Verify a transaction |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
