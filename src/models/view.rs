use crate::models::article::{Article, ArticleStatus};

/// The navigation filter selected in the sidebar. Persists until changed,
/// never across restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewSelection {
    #[default]
    All,
    Original,
    Updated,
    Processing,
    Failed,
}

impl ViewSelection {
    /// Sidebar order.
    pub const ALL_VIEWS: [ViewSelection; 5] = [
        ViewSelection::All,
        ViewSelection::Original,
        ViewSelection::Updated,
        ViewSelection::Processing,
        ViewSelection::Failed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ViewSelection::All => "All Articles",
            ViewSelection::Original => "Original",
            ViewSelection::Updated => "Updated",
            ViewSelection::Processing => "Processing",
            ViewSelection::Failed => "Failed",
        }
    }

    /// Lenient parsing: unrecognized names fall back to `All` so a stray
    /// view id can never panic or silently produce an empty list.
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => ViewSelection::All,
            "original" => ViewSelection::Original,
            "updated" => ViewSelection::Updated,
            "processing" => ViewSelection::Processing,
            "failed" => ViewSelection::Failed,
            _ => ViewSelection::All,
        }
    }

    fn status(&self) -> Option<ArticleStatus> {
        match self {
            ViewSelection::All => None,
            ViewSelection::Original => Some(ArticleStatus::Original),
            ViewSelection::Updated => Some(ArticleStatus::Updated),
            ViewSelection::Processing => Some(ArticleStatus::Processing),
            ViewSelection::Failed => Some(ArticleStatus::Failed),
        }
    }

    /// Pure derivation of the visible subset, preserving server order.
    pub fn filter(&self, articles: &[Article]) -> Vec<Article> {
        match self.status() {
            None => articles.to_vec(),
            Some(status) => articles
                .iter()
                .filter(|a| a.status == status)
                .cloned()
                .collect(),
        }
    }
}
