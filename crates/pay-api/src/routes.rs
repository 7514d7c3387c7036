//! # Routes
//!
//! Axum router configuration for the proxy API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// Create the main application router
///
/// Routes:
/// - GET  /api/health - Health check
/// - GET  /api/test - Liveness probe with timestamp
/// - POST /api/initialize-transaction - Initialize a transaction
/// - GET  /api/verify-transaction/{reference} - Verify a transaction
///
/// Anything else, including a known path with the wrong method, answers 404.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/test", get(handlers::test_endpoint))
        .route(
            "/api/initialize-transaction",
            post(handlers::initialize_transaction),
        )
        .route(
            "/api/verify-transaction/{reference}",
            get(handlers::verify_transaction),
        )
        // Empty reference segment
        .route(
            "/api/verify-transaction",
            get(handlers::verify_transaction_without_reference),
        )
        .route(
            "/api/verify-transaction/",
            get(handlers::verify_transaction_without_reference),
        )
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        // State
        .with_state(state)
}

/// Build the CORS layer from the configured allow-list.
///
/// Preflight `OPTIONS` requests are answered by the layer itself.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let headers = [header::CONTENT_TYPE, header::AUTHORIZATION];

    // Credentials cannot be combined with a wildcard origin
    if allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(true)
}
