use crate::models::article::{Article, ArticleStatus};

/// Per-status counts over the whole collection. Always derived in one pass
/// from the articles it summarizes, never mutated independently, so
/// `original + updated + processing + failed == total` holds by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSummary {
    pub total: usize,
    pub original: usize,
    pub updated: usize,
    pub processing: usize,
    pub failed: usize,
}

impl StatsSummary {
    pub fn from_articles(articles: &[Article]) -> Self {
        let mut stats = StatsSummary {
            total: articles.len(),
            ..Default::default()
        };
        for article in articles {
            match article.status {
                ArticleStatus::Original => stats.original += 1,
                ArticleStatus::Updated => stats.updated += 1,
                ArticleStatus::Processing => stats.processing += 1,
                ArticleStatus::Failed => stats.failed += 1,
            }
        }
        stats
    }

    /// Percentage of articles that reached `updated`, rounded. Zero for an
    /// empty collection.
    pub fn success_rate(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            ((self.updated as f64 / self.total as f64) * 100.0).round() as u32
        }
    }
}
