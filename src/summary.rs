//! Request and response bodies exchanged with the summarisation endpoint.

use serde::{Deserialize, Serialize};

/// Body posted to the endpoint.
///
/// Both fields are sent exactly as typed, empty strings included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Free article text
    pub article_text: String,
    /// Article URL for the server to fetch
    pub article_url: String,
}

impl SummarizeRequest {
    /// Create a new request from the two form values
    pub fn new(article_text: impl Into<String>, article_url: impl Into<String>) -> Self {
        Self {
            article_text: article_text.into(),
            article_url: article_url.into(),
        }
    }
}

/// Body returned by the endpoint: either `{"summary": ..}` or `{"error": ..}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What a response means for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show in the modal
    Summary(String),
    /// Application error reported by the server
    Failed(String),
}

impl SummarizeResponse {
    pub fn success(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            summary: None,
            error: Some(error.into()),
        }
    }

    /// Classify the response. A non-empty `error` wins over any summary.
    pub fn outcome(&self) -> Outcome {
        match self.error.as_deref() {
            Some(error) if !error.is_empty() => Outcome::Failed(error.to_string()),
            _ => Outcome::Summary(self.summary.clone().unwrap_or_default()),
        }
    }
}
