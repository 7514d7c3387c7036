//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the payment gateway and configuration.

use pay_core::BoxedPaymentGateway;
use pay_paystack::PaystackGateway;
use std::net::SocketAddr;
use std::sync::Arc;

/// Origins allowed by CORS when `ALLOWED_ORIGINS` is unset
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "https://paystack-frontend-test.vercel.app",
    "https://your-production-frontend-url.com",
];

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// CORS allow-list; `*` allows any origin without credentials
    pub allowed_origins: Vec<String>,
    /// Include upstream failure details in error bodies
    pub expose_upstream_errors: bool,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load through a variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|list| {
                list.split(',')
                    .map(|o| o.trim().trim_end_matches('/').to_string())
                    .filter(|o| !o.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| {
                DEFAULT_ALLOWED_ORIGINS
                    .iter()
                    .map(|o| o.to_string())
                    .collect()
            });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(5000),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            allowed_origins,
            expose_upstream_errors: lookup("EXPOSE_UPSTREAM_ERRORS")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway requests are forwarded to
    pub gateway: BoxedPaymentGateway,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with the Paystack gateway from the environment
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let gateway = PaystackGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Paystack: {}", e))?;

        if !gateway.config().has_secret_key() {
            tracing::warn!(
                "PAYSTACK_SECRET_KEY is not set; payment routes will answer 500 until it is"
            );
        } else if gateway.config().is_test_mode() {
            tracing::info!("Paystack running with a test key");
        } else if gateway.config().is_live_mode() {
            tracing::info!("Paystack running with a live key");
        }

        Ok(Self::with_gateway(config, Arc::new(gateway)))
    }

    /// Create state around an explicit gateway
    pub fn with_gateway(config: AppConfig, gateway: BoxedPaymentGateway) -> Self {
        Self { gateway, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.allowed_origins.len(), DEFAULT_ALLOWED_ORIGINS.len());
        assert!(!config.expose_upstream_errors);
    }

    #[test]
    fn test_app_config_overrides() {
        let config = AppConfig::from_vars(|key| match key {
            "PORT" => Some("8080".to_string()),
            "ENVIRONMENT" => Some("production".to_string()),
            "ALLOWED_ORIGINS" => Some("https://a.example/, https://b.example,,".to_string()),
            "EXPOSE_UPSTREAM_ERRORS" => Some("TRUE".to_string()),
            _ => None,
        });

        assert_eq!(config.port, 8080);
        assert!(config.is_production());
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert!(config.expose_upstream_errors);
    }

    #[test]
    fn test_unparseable_port_falls_back() {
        let config = AppConfig::from_vars(|key| (key == "PORT").then(|| "http".to_string()));
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..AppConfig::default()
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");

        let config = AppConfig {
            host: "not a host".to_string(),
            ..AppConfig::default()
        };
        assert!(config.socket_addr().is_err());
    }
}
