use std::time::Duration;

use rowsite_core::{Row, RowsEnvelope};
use thiserror::Error;

/// Default API root: the Hugging Face datasets-server rows endpoint.
pub const DEFAULT_API_ROOT: &str = "https://datasets-server.huggingface.co/rows";

/// Descriptive user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Indexer)";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub api_root: String,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Parameters of one page request, URL-encoded into the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowQuery {
    pub dataset: String,
    pub config: String,
    pub split: String,
    /// Row offset, >= 0.
    pub offset: u64,
    /// Page length in rows, > 0.
    pub length: u32,
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-200 response. Fatal, no retry.
    #[error("http status {status} for {url}")]
    HttpStatus { status: u16, url: String },
    /// Response body was not the expected JSON envelope. Fatal.
    #[error("failed to decode rows response: {0}")]
    Decode(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Seam for the page fetch, so the build driver can be tested against a mock
/// server or a scripted fetcher.
#[async_trait::async_trait]
pub trait RowFetcher: Send + Sync {
    /// Fetches one page of rows. An empty Vec signals end-of-data and is not
    /// an error.
    async fn fetch_rows(&self, query: &RowQuery) -> Result<Vec<Row>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestRowFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestRowFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl RowFetcher for ReqwestRowFetcher {
    async fn fetch_rows(&self, query: &RowQuery) -> Result<Vec<Row>, FetchError> {
        let offset = query.offset.to_string();
        let length = query.length.to_string();
        let response = self
            .client
            .get(&self.settings.api_root)
            .query(&[
                ("dataset", query.dataset.as_str()),
                ("config", query.config.as_str()),
                ("split", query.split.as_str()),
                ("offset", offset.as_str()),
                ("length", length.as_str()),
            ])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let url = response.url().to_string();
        if status.as_u16() != 200 {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        let envelope: RowsEnvelope =
            serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()))?;
        Ok(envelope.into_rows())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::Timeout(err.to_string());
    }
    FetchError::Network(err.to_string())
}
