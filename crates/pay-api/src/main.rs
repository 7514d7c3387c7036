//! # Paystack Proxy
//!
//! Keeps the Paystack secret key on the server and relays transaction
//! initialization and verification for browser clients.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export PAYSTACK_SECRET_KEY=sk_test_...
//! export PORT=5000
//! export ALLOWED_ORIGINS=http://localhost:3000
//!
//! # Run the server
//! paystack-proxy
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    init_tracing();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.gateway.provider_name());
    info!("Allowed origins: {:?}", state.config.allowed_origins);

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Paystack proxy starting on http://{}", addr);

    if !is_prod {
        info!("Health: GET http://{}/api/health", addr);
        info!("Initialize: POST http://{}/api/initialize-transaction", addr);
        info!("Verify: GET http://{}/api/verify-transaction/{{reference}}", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Paystack proxy stopped");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn print_banner() {
    println!(
        r#"
  Paystack Proxy
  ━━━━━━━━━━━━━━━━━━━━━━━
  Secret-keeping payment relay
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
