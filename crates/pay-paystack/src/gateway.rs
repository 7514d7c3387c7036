//! # Paystack Transactions
//!
//! Implementation of the Paystack Transactions API
//! (`/transaction/initialize` and `/transaction/verify/{reference}`).

use crate::config::PaystackConfig;
use async_trait::async_trait;
use pay_core::error::MISSING_SECRET_KEY;
use pay_core::{
    InitializeTransaction, PaymentError, PaymentGateway, PaymentResult, TransactionData,
    TransactionReference,
};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

const PROVIDER: &str = "paystack";

/// Paystack gateway
///
/// Holds the secret key server-side and relays the `data` field of each
/// Paystack response.
pub struct PaystackGateway {
    config: PaystackConfig,
    client: Client,
}

impl PaystackGateway {
    /// Create a new Paystack gateway
    pub fn new(config: PaystackConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        Self::new(PaystackConfig::from_env())
    }

    pub fn config(&self) -> &PaystackConfig {
        &self.config
    }

    /// Bearer header, or a configuration error when no key is set
    fn auth_header(&self) -> PaymentResult<String> {
        self.config
            .auth_header()
            .ok_or_else(|| PaymentError::Configuration(MISSING_SECRET_KEY.to_string()))
    }

    /// Build an endpoint URL; each segment is percent-encoded on its own.
    fn endpoint(&self, segments: &[&str]) -> PaymentResult<Url> {
        let mut url = Url::parse(&self.config.api_base_url).map_err(|e| {
            PaymentError::Configuration(format!("Invalid Paystack API base URL: {}", e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                PaymentError::Configuration(
                    "Paystack API base URL cannot carry a path".to_string(),
                )
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Unwrap the Paystack envelope into its `data` payload
    async fn read_envelope(response: Response) -> PaymentResult<TransactionData> {
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            error!("Paystack API error: status={}, body={}", status, body);

            let message = serde_json::from_str::<PaystackEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or(body);

            return Err(PaymentError::Provider {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let envelope: PaystackEnvelope = serde_json::from_str(&body).map_err(|e| {
            PaymentError::MalformedResponse(format!("Failed to parse Paystack response: {}", e))
        })?;

        if envelope.status == Some(false) {
            debug!(
                "Paystack returned status=false with HTTP {}: {:?}",
                status, envelope.message
            );
        }

        // A null `data` counts as missing, so it is a 500 rather than a 200 with null.
        envelope.data.map(TransactionData).ok_or_else(|| {
            PaymentError::MalformedResponse("Paystack response has no data field".to_string())
        })
    }
}

#[async_trait]
impl PaymentGateway for PaystackGateway {
    #[instrument(skip(self, transaction), fields(amount = %transaction.amount))]
    async fn initialize_transaction(
        &self,
        transaction: &InitializeTransaction,
    ) -> PaymentResult<TransactionData> {
        let auth = self.auth_header()?;
        let url = self.endpoint(&["transaction", "initialize"])?;

        debug!("Initializing Paystack transaction: url={}", url);

        let response = self
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, auth)
            .json(transaction)
            .send()
            .await
            .map_err(transport_error)?;

        let data = Self::read_envelope(response).await?;

        info!(
            "Initialized Paystack transaction: reference={}",
            data.str_field("reference").unwrap_or("<none>")
        );

        Ok(data)
    }

    #[instrument(skip(self), fields(reference = %reference))]
    async fn verify_transaction(
        &self,
        reference: &TransactionReference,
    ) -> PaymentResult<TransactionData> {
        let auth = self.auth_header()?;
        let url = self.endpoint(&["transaction", "verify", reference.as_str()])?;

        debug!("Verifying Paystack transaction: url={}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, auth)
            .send()
            .await
            .map_err(transport_error)?;

        let data = Self::read_envelope(response).await?;

        info!(
            "Verified Paystack transaction: status={}",
            data.str_field("status").unwrap_or("<none>")
        );

        Ok(data)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

fn transport_error(err: reqwest::Error) -> PaymentError {
    error!("Paystack request failed: {}", err);
    if err.is_timeout() {
        PaymentError::Network(format!("request timed out: {}", err))
    } else {
        PaymentError::Network(err.to_string())
    }
}

// =============================================================================
// Paystack API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct PaystackEnvelope {
    #[serde(default)]
    status: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<serde_json::Value>,
}
