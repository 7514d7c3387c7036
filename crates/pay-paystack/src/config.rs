//! # Paystack Configuration
//!
//! Configuration management for the Paystack integration.
//! The secret key is loaded from the environment and never logged.

use std::env;
use std::fmt;
use std::time::Duration;

/// Default Paystack API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.paystack.co";

/// Default timeout for outbound calls
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Paystack API configuration
#[derive(Clone)]
pub struct PaystackConfig {
    /// Secret API key (sk_test_... or sk_live_...), if configured
    pub secret_key: Option<String>,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// Timeout applied to each outbound request
    pub timeout: Duration,
}

impl PaystackConfig {
    /// Load configuration from environment variables.
    ///
    /// - `PAYSTACK_SECRET_KEY` (optional here, checked per request)
    /// - `PAYSTACK_API_BASE_URL`
    /// - `PAYSTACK_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through a variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secret_key = lookup("PAYSTACK_SECRET_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        if let Some(ref key) = secret_key {
            if !key.starts_with("sk_test_") && !key.starts_with("sk_live_") {
                tracing::warn!("PAYSTACK_SECRET_KEY does not start with sk_test_ or sk_live_");
            }
        }

        let api_base_url = lookup("PAYSTACK_API_BASE_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let timeout_secs = lookup("PAYSTACK_TIMEOUT_SECS")
            .and_then(|t| t.trim().parse::<u64>().ok())
            .filter(|t| *t > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            secret_key,
            api_base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Create config with an explicit key (for testing)
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: Some(secret_key.into()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Create config without a secret key
    pub fn unconfigured() -> Self {
        Self {
            secret_key: None,
            ..Self::new("")
        }
    }

    /// Check if a secret key is present
    pub fn has_secret_key(&self) -> bool {
        self.secret_key.is_some()
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key
            .as_deref()
            .is_some_and(|k| k.starts_with("sk_test_"))
    }

    /// Check if using live keys
    pub fn is_live_mode(&self) -> bool {
        self.secret_key
            .as_deref()
            .is_some_and(|k| k.starts_with("sk_live_"))
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> Option<String> {
        self.secret_key.as_ref().map(|k| format!("Bearer {}", k))
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder: set outbound timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for PaystackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaystackConfig")
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_key_modes() {
        let config = PaystackConfig::new("sk_test_abc123");
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());

        let config = PaystackConfig::new("sk_live_abc123");
        assert!(!config.is_test_mode());
        assert!(config.is_live_mode());

        let config = PaystackConfig::unconfigured();
        assert!(!config.has_secret_key());
        assert!(!config.is_test_mode());
    }

    #[test]
    fn test_auth_header() {
        let config = PaystackConfig::new("sk_test_abc123");
        assert_eq!(config.auth_header().as_deref(), Some("Bearer sk_test_abc123"));
        assert_eq!(PaystackConfig::unconfigured().auth_header(), None);
    }

    #[test]
    fn test_from_vars_defaults() {
        let config = PaystackConfig::from_vars(vars(&[]));
        assert!(!config.has_secret_key());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = PaystackConfig::from_vars(vars(&[
            ("PAYSTACK_SECRET_KEY", " sk_test_abc123 "),
            ("PAYSTACK_API_BASE_URL", "http://127.0.0.1:9999/"),
            ("PAYSTACK_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.secret_key.as_deref(), Some("sk_test_abc123"));
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_secret_is_unset() {
        let config = PaystackConfig::from_vars(vars(&[("PAYSTACK_SECRET_KEY", "   ")]));
        assert!(!config.has_secret_key());
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        for raw in ["zero", "0", "-3"] {
            let config = PaystackConfig::from_vars(vars(&[("PAYSTACK_TIMEOUT_SECS", raw)]));
            assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", PaystackConfig::new("sk_test_abc123"));
        assert!(!rendered.contains("sk_test_abc123"));
        assert!(rendered.contains("<redacted>"));
    }
}
