use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::models::article::Article;

// ─── Error taxonomy ───────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("server returned status {code}")]
    Status { code: u16 },

    #[error("malformed response body: {0}")]
    Body(String),
}

impl ApiError {
    /// Timeouts get their own user-facing message class.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if let Some(status) = err.status() {
            ApiError::Status {
                code: status.as_u16(),
            }
        } else if err.is_decode() {
            ApiError::Body(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

// ─── Wire envelope ────────────────────────────────────────────

/// Every success body wraps its payload in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    #[serde(default)]
    data: Option<T>,
}

// ─── Gateway trait ────────────────────────────────────────────

/// The six operations the dashboard uses against the article service.
/// No retries, no business logic; state code talks to this trait so tests
/// can substitute an in-memory fake.
#[async_trait]
pub trait ArticleGateway: Send + Sync {
    async fn list_articles(&self) -> Result<Vec<Article>, ApiError>;
    async fn get_article(&self, id: &str) -> Result<Article, ApiError>;
    /// Ask the service to start enhancing one article. Ack only; the new
    /// status shows up on the next list fetch.
    async fn process_article(&self, id: &str) -> Result<(), ApiError>;
    /// Kick off the bulk scrape (the service ingests a batch of 5).
    async fn scrape_init(&self) -> Result<(), ApiError>;
    async fn update_article(&self, id: &str, patch: &serde_json::Value) -> Result<(), ApiError>;
    async fn delete_article(&self, id: &str) -> Result<(), ApiError>;
}

// ─── HTTP client ──────────────────────────────────────────────

pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[async_trait]
impl ArticleGateway for ApiClient {
    async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
        debug!("GET /articles");
        let response = self
            .http
            .get(self.url("/articles"))
            .send()
            .await?
            .error_for_status()?;
        let envelope: Envelope<Vec<Article>> = response.json().await?;
        // A missing or null `data` field means an empty collection.
        Ok(envelope.data.unwrap_or_default())
    }

    async fn get_article(&self, id: &str) -> Result<Article, ApiError> {
        debug!("GET /articles/{id}");
        let response = self
            .http
            .get(self.url(&format!("/articles/{id}")))
            .send()
            .await?
            .error_for_status()?;
        let envelope: Envelope<Article> = response.json().await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Body("missing data field".into()))
    }

    async fn process_article(&self, id: &str) -> Result<(), ApiError> {
        debug!("POST /articles/{id}/process");
        self.http
            .post(self.url(&format!("/articles/{id}/process")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn scrape_init(&self) -> Result<(), ApiError> {
        debug!("POST /articles/scrape/init");
        self.http
            .post(self.url("/articles/scrape/init"))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn update_article(&self, id: &str, patch: &serde_json::Value) -> Result<(), ApiError> {
        debug!("PUT /articles/{id}");
        self.http
            .put(self.url(&format!("/articles/{id}")))
            .json(patch)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete_article(&self, id: &str) -> Result<(), ApiError> {
        debug!("DELETE /articles/{id}");
        self.http
            .delete(self.url(&format!("/articles/{id}")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
