//! HTTP client for the Nucleus talk2docs citation service.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use shared_types::{Citation, CitationRequest, CitationResponse, CITATION_STREAM_PATH};
use std::fmt;
use std::sync::OnceLock;

/// Failure of a single citation request.
#[derive(Debug, Clone, PartialEq)]
pub enum CitationError {
    /// The request could not be sent or the body could not be read.
    Transport(String),
    /// The service answered with a non-success status.
    Status { status: u16, body: String },
    /// The body was not a citation response.
    Parse(String),
}

impl fmt::Display for CitationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CitationError::Transport(e) => write!(f, "citation request failed: {e}"),
            CitationError::Status { status, body } => {
                write!(f, "citation service returned {status}: {body}")
            }
            CitationError::Parse(e) => write!(f, "citation response could not be decoded: {e}"),
        }
    }
}

impl std::error::Error for CitationError {}

/// Client shared by every server function call.
static SHARED: OnceLock<CitationClient> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct CitationClient {
    http: reqwest::Client,
    base_url: String,
}

impl CitationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Client pointed at the configured base URL.
    pub fn from_config() -> Self {
        SHARED
            .get_or_init(|| Self::new(crate::config::app_config().nucleus.base_url.clone()))
            .clone()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the document chat endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CITATION_STREAM_PATH)
    }

    /// Ask the service for citations matching `keyword`.
    ///
    /// Issues exactly one POST. Failures are logged and returned as-is;
    /// nothing is retried.
    #[tracing::instrument(skip(self, token), fields(endpoint = %self.endpoint()))]
    pub async fn fetch_citations(
        &self,
        keyword: &str,
        token: &str,
    ) -> Result<Vec<Citation>, CitationError> {
        match self.post(keyword, token).await {
            Ok(citations) => {
                tracing::info!(count = citations.len(), "Fetched citations");
                Ok(citations)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching citations");
                Err(e)
            }
        }
    }

    async fn post(&self, keyword: &str, token: &str) -> Result<Vec<Citation>, CitationError> {
        let response = self
            .http
            .post(self.endpoint())
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .json(&CitationRequest::for_keyword(keyword))
            .send()
            .await
            .map_err(|e| CitationError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CitationError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(CitationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        CitationResponse::from_json(&body)
            .map(CitationResponse::into_citations)
            .map_err(|e| CitationError::Parse(e.to_string()))
    }
}
