//! Order-intake client.
//!
//! Delivers one `OrderPayload` per submission attempt to the configured
//! endpoint as a JSON POST. Delivery is fire-and-forget at the HTTP
//! level: any response counts as delivered, and the status and body are
//! not inspected. Only transport-level failures (connection refused, DNS,
//! broken pipe) fail a submission. There is no retry, no timeout beyond
//! the operating system's, and no cancellation.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use thiserror::Error;
use url::Url;

use pie_orders_core::order::OrderPayload;

/// Errors that can occur when delivering an order.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the order-intake endpoint.
#[derive(Debug, Clone)]
pub struct IntakeClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl IntakeClient {
    /// Create a new intake client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(endpoint: Url) -> Result<Self, IntakeError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// The configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Deliver one order payload.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Http`] only when the request never produced
    /// an HTTP response. A 4xx or 5xx still counts as delivered; the
    /// endpoint's response content is deliberately ignored.
    pub async fn submit(&self, payload: &OrderPayload) -> Result<(), IntakeError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "order intake responded");
        Ok(())
    }
}
