//! # Request Handlers
//!
//! Axum request handlers for the proxy API.
//! Every failure is turned into an `ErrorResponse` here; nothing reaches the
//! transport layer as an unhandled error.

use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use pay_core::error::{INVALID_REFERENCE, MISSING_INITIALIZE_FIELDS, MISSING_REFERENCE};
use pay_core::{
    InitializeRequest, PaymentError, TransactionData, TransactionOperation, TransactionReference,
};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn payment_error_to_response(
    err: PaymentError,
    operation: TransactionOperation,
    expose_details: bool,
) -> HandlerError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let response = if err.is_upstream() {
        error!("Transaction {} failed: {}", operation.as_str(), err);
        let response = ErrorResponse::new(operation.failure_message());
        if expose_details {
            response.with_details(err.to_string())
        } else {
            response
        }
    } else {
        if let PaymentError::Configuration(message) = &err {
            error!("Cannot {} transaction: {}", operation.as_str(), message);
        } else {
            debug!("Rejected {} request: {}", operation.as_str(), err);
        }
        ErrorResponse::new(err.to_string())
    };

    (status, Json(response))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "environment": state.config.environment
    }))
}

/// Liveness probe with a timestamp
pub async fn test_endpoint() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Paystack proxy is running",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Initialize a transaction with the payment provider
#[instrument(skip(state, payload))]
pub async fn initialize_transaction(
    State(state): State<AppState>,
    payload: Result<Json<InitializeRequest>, JsonRejection>,
) -> Result<Json<TransactionData>, HandlerError> {
    let operation = TransactionOperation::Initialize;
    let expose = state.config.expose_upstream_errors;

    let request = payload.map(|Json(request)| request).map_err(|rejection| {
        debug!("Unreadable initialize body: {}", rejection.body_text());
        payment_error_to_response(
            PaymentError::validation(MISSING_INITIALIZE_FIELDS),
            operation,
            expose,
        )
    })?;

    let transaction = request
        .validate()
        .map_err(|e| payment_error_to_response(e, operation, expose))?;

    info!(
        "Initializing transaction via {}: amount={}",
        state.gateway.provider_name(),
        transaction.amount
    );

    let data = state
        .gateway
        .initialize_transaction(&transaction)
        .await
        .map_err(|e| payment_error_to_response(e, operation, expose))?;

    Ok(Json(data))
}

/// Verify a transaction by reference
#[instrument(skip(state, path))]
pub async fn verify_transaction(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<TransactionData>, HandlerError> {
    let operation = TransactionOperation::Verify;
    let expose = state.config.expose_upstream_errors;

    let Path(raw) = path.map_err(|rejection| {
        debug!("Undecodable reference: {}", rejection.body_text());
        payment_error_to_response(PaymentError::validation(INVALID_REFERENCE), operation, expose)
    })?;

    let reference = TransactionReference::parse(&raw)
        .map_err(|e| payment_error_to_response(e, operation, expose))?;

    info!(
        "Verifying transaction via {}: reference={}",
        state.gateway.provider_name(),
        reference
    );

    let data = state
        .gateway
        .verify_transaction(&reference)
        .await
        .map_err(|e| payment_error_to_response(e, operation, expose))?;

    Ok(Json(data))
}

/// Verify route hit without a reference segment
pub async fn verify_transaction_without_reference() -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(MISSING_REFERENCE)),
    )
}

/// Fallback for unmatched paths and methods
pub async fn not_found(method: Method, uri: Uri) -> HandlerError {
    warn!("Route not found: {} {}", method, uri);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Route not found")),
    )
}
