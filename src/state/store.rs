use tracing::{info, warn};

use crate::api::ApiError;
use crate::models::article::Article;
use crate::models::stats::StatsSummary;

pub const LOAD_FAILED_MSG: &str = "Failed to load articles. Please try again.";
pub const LOAD_TIMEOUT_MSG: &str = "Loading articles timed out. Please try again.";

/// Authoritative in-memory collection plus its derived statistics, and the
/// single source of truth for the loading and last-error flags.
///
/// Refresh policy: at most one list fetch in flight. A trigger that arrives
/// while a fetch is outstanding is coalesced into exactly one follow-up
/// fetch, so a stale response can never race a newer one into the
/// collection. The driver loop lives in the app shell:
///
/// ```text
/// if begin_refresh() {
///     loop { if !complete_refresh(fetch().await) { break } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleStore {
    articles: Vec<Article>,
    stats: StatsSummary,
    error: Option<String>,
    fetching: bool,
    queued: bool,
    scraping: bool,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh, or queue one if a fetch is already in flight.
    /// Returns whether the caller should perform the fetch.
    pub fn begin_refresh(&mut self) -> bool {
        if self.fetching {
            self.queued = true;
            false
        } else {
            self.fetching = true;
            true
        }
    }

    /// Apply a fetch result. Collection and statistics are replaced in the
    /// same mutation, so no reader can observe a mismatched pair. A failure
    /// keeps the last-known-good data and records a stable message.
    ///
    /// Returns whether a follow-up fetch was queued while this one ran; if
    /// so the caller must fetch again (the in-flight flag stays raised).
    pub fn complete_refresh(&mut self, result: Result<Vec<Article>, ApiError>) -> bool {
        match result {
            Ok(articles) => {
                info!("loaded {} articles", articles.len());
                self.stats = StatsSummary::from_articles(&articles);
                self.articles = articles;
                self.error = None;
            }
            Err(err) => {
                warn!("list fetch failed: {err}");
                self.error = Some(if err.is_timeout() {
                    LOAD_TIMEOUT_MSG.to_string()
                } else {
                    LOAD_FAILED_MSG.to_string()
                });
            }
        }

        if self.queued {
            self.queued = false;
            true
        } else {
            self.fetching = false;
            false
        }
    }

    /// Raised by the app shell while a bulk scrape is outstanding, so the
    /// UI shows one unified busy state for scraping and fetching.
    pub fn set_scraping(&mut self, scraping: bool) {
        self.scraping = scraping;
    }

    pub fn loading(&self) -> bool {
        self.fetching || self.scraping
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn stats(&self) -> StatsSummary {
        self.stats
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dismiss the error banner.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, status: &str) -> Article {
        serde_json::from_str(&format!(
            r#"{{"_id":"{id}","originalTitle":"T","originalContent":"C",
                "status":"{status}","scrapedDate":"2024-01-02T03:04:05Z"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn successful_refresh_replaces_collection_and_stats_together() {
        let mut store = ArticleStore::new();
        assert!(store.begin_refresh());
        assert!(store.loading());

        let follow_up = store.complete_refresh(Ok(vec![
            article("1", "original"),
            article("2", "updated"),
            article("3", "processing"),
        ]));

        assert!(!follow_up);
        assert!(!store.loading());
        assert_eq!(store.articles().len(), 3);
        let stats = store.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.original, 1);
        assert_eq!(stats.updated, 1);
        assert_eq!(stats.processing, 1);
        assert_eq!(stats.failed, 0);
        assert_eq!(store.error(), None);
    }

    #[test]
    fn failed_refresh_keeps_last_known_good_data() {
        let mut store = ArticleStore::new();
        store.begin_refresh();
        store.complete_refresh(Ok(vec![article("1", "original")]));
        let before_articles = store.articles().to_vec();
        let before_stats = store.stats();

        store.begin_refresh();
        store.complete_refresh(Err(ApiError::Network("connection refused".into())));

        assert_eq!(store.articles(), before_articles.as_slice());
        assert_eq!(store.stats(), before_stats);
        assert_eq!(store.error(), Some(LOAD_FAILED_MSG));
        assert!(!store.loading());
    }

    #[test]
    fn timeout_failure_gets_timeout_class_message() {
        let mut store = ArticleStore::new();
        store.begin_refresh();
        store.complete_refresh(Err(ApiError::Timeout));
        assert_eq!(store.error(), Some(LOAD_TIMEOUT_MSG));
        assert!(!store.loading());
    }

    #[test]
    fn success_clears_prior_error() {
        let mut store = ArticleStore::new();
        store.begin_refresh();
        store.complete_refresh(Err(ApiError::Timeout));
        assert!(store.error().is_some());

        store.begin_refresh();
        store.complete_refresh(Ok(vec![]));
        assert_eq!(store.error(), None);
    }

    #[test]
    fn triggers_during_a_fetch_coalesce_to_one_follow_up() {
        let mut store = ArticleStore::new();
        assert!(store.begin_refresh());

        // Three more triggers arrive while the fetch is in flight.
        assert!(!store.begin_refresh());
        assert!(!store.begin_refresh());
        assert!(!store.begin_refresh());

        // One follow-up, during which loading never drops.
        assert!(store.complete_refresh(Ok(vec![])));
        assert!(store.loading());

        assert!(!store.complete_refresh(Ok(vec![])));
        assert!(!store.loading());
    }

    #[test]
    fn scrape_flag_keeps_loading_raised_across_fetch_completion() {
        let mut store = ArticleStore::new();
        store.set_scraping(true);
        assert!(store.loading());

        store.begin_refresh();
        store.complete_refresh(Ok(vec![]));
        assert!(store.loading());

        store.set_scraping(false);
        assert!(!store.loading());
    }

    #[test]
    fn clear_error_dismisses_banner() {
        let mut store = ArticleStore::new();
        store.begin_refresh();
        store.complete_refresh(Err(ApiError::Status { code: 500 }));
        assert!(store.error().is_some());
        store.clear_error();
        assert_eq!(store.error(), None);
    }
}
