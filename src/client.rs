//! HTTP client for the summarisation endpoint.
//!
//! Uses reqwest for the POST and serde_json for the response body.

use crate::config::EndpointConfig;
use crate::summary::{SummarizeRequest, SummarizeResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// User-Agent string identifying this client
const USER_AGENT: &str = concat!("summa-view/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Anything that can turn a request into a summary response.
#[async_trait]
pub trait SummaryService: Send + Sync {
    async fn summarize(&self, request: &SummarizeRequest)
        -> Result<SummarizeResponse, ClientError>;
}

/// `SummaryService` backed by a real HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpSummaryService {
    client: Client,
    endpoint: Url,
}

impl HttpSummaryService {
    /// Build a client for the configured endpoint
    pub fn new(config: &EndpointConfig) -> Result<Self, ClientError> {
        let endpoint = config.url()?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SummaryService for HttpSummaryService {
    async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummarizeResponse, ClientError> {
        tracing::debug!(endpoint = %self.endpoint, "posting summarize request");

        // The server reports application errors with a 4xx status and a JSON
        // body, so the status is not checked here.
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(%status, bytes = body.len(), "summarize response received");

        Ok(serde_json::from_slice(&body)?)
    }
}
