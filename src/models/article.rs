use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scraped article and its enhancement lifecycle.
/// Mirrors the service's wire format: camelCase fields, Mongo-style `_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: String,
    pub original_title: String,
    pub original_content: String,
    #[serde(default)]
    pub updated_title: Option<String>,
    #[serde(default)]
    pub updated_content: Option<String>,
    pub status: ArticleStatus,
    pub scraped_date: DateTime<Utc>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub google_search_results: Vec<SearchResult>,
    #[serde(default)]
    pub reference_links: Vec<ReferenceLink>,
}

impl Article {
    /// Number of discovered source candidates. The only thing the
    /// dashboard reads from the search results.
    pub fn source_count(&self) -> usize {
        self.google_search_results.len()
    }

    /// Whether the enhance action is offered. `updated` and `processing`
    /// are not re-enhanced automatically; `failed` can be re-triggered
    /// by the operator.
    pub fn can_enhance(&self) -> bool {
        matches!(self.status, ArticleStatus::Original | ArticleStatus::Failed)
    }
}

/// Server-assigned lifecycle state: original → processing → updated | failed.
/// An unknown wire value is a modeling error and fails decoding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Original,
    Processing,
    Updated,
    Failed,
}

impl ArticleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ArticleStatus::Original => "Original",
            ArticleStatus::Processing => "Processing",
            ArticleStatus::Updated => "Updated",
            ArticleStatus::Failed => "Failed",
        }
    }

    /// CSS suffix shared by the status chip, the card's color bar and
    /// the sidebar dots.
    pub fn css(&self) -> &'static str {
        match self {
            ArticleStatus::Original => "original",
            ArticleStatus::Processing => "processing",
            ArticleStatus::Updated => "updated",
            ArticleStatus::Failed => "failed",
        }
    }
}

/// One discovered source candidate. The service attaches more metadata
/// than we read; unknown fields are tolerated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub rank: Option<i64>,
}

/// A source cited by the enhancement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceLink {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}
