//! HTTP client for the collection webhook
//!
//! Posts each lead document once as JSON. Any 2xx status counts as
//! acceptance; the response body is never read.

use super::{LeadDocument, LeadSink, SubmitError};
use crate::config::TuiConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client, Url};
use std::time::Duration;

/// Client posting lead documents to the configured webhook
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    endpoint: Url,
}

impl WebhookClient {
    /// Create a client from the endpoint and timeout in `config`
    pub fn from_config(config: &TuiConfig) -> Result<Self> {
        Self::new(&config.endpoint(), config.submit_timeout())
    }

    /// Create a client posting to `endpoint`. Without a timeout a request
    /// waits until the transport settles.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).with_context(|| format!("invalid endpoint URL: {endpoint}"))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build HTTP client")?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LeadSink for WebhookClient {
    async fn deliver(&self, document: &LeadDocument) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(document)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::debug!(%status, "webhook accepted lead");
        Ok(())
    }
}
