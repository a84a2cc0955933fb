use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::api::ArticleGateway;

pub const ENHANCE_OK_MSG: &str = "Article processed successfully!";
pub const ENHANCE_FAILED_MSG: &str = "Processing failed. Please try again.";
pub const ENHANCE_BUSY_MSG: &str = "This article is already being enhanced.";
pub const SCRAPE_OK_MSG: &str = "5 articles scraped successfully!";
pub const SCRAPE_FAILED_MSG: &str = "Scraping failed. Please try again.";

/// Uniform result of a mutating action. Errors never cross this boundary;
/// the transport detail goes to the log and the caller gets a stable,
/// presentable message.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
}

impl ActionOutcome {
    fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

/// Wraps the two mutating remote operations. Owns the refresh token (bumped
/// exactly once per successful mutation) and the set of article ids with an
/// enhancement in flight. Clone is cheap; all clones share state.
#[derive(Clone)]
pub struct Orchestrator {
    gateway: Arc<dyn ArticleGateway>,
    busy: Arc<Mutex<HashSet<String>>>,
    token: Arc<AtomicU64>,
}

impl PartialEq for Orchestrator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.token, &other.token)
    }
}

impl Orchestrator {
    pub fn new(gateway: Arc<dyn ArticleGateway>) -> Self {
        Self {
            gateway,
            busy: Arc::new(Mutex::new(HashSet::new())),
            token: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn gateway(&self) -> Arc<dyn ArticleGateway> {
        self.gateway.clone()
    }

    /// Monotonic counter the app shell watches to drive store refreshes.
    pub fn refresh_token(&self) -> u64 {
        self.token.load(Ordering::SeqCst)
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.busy.lock().expect("busy set poisoned").contains(id)
    }

    fn bump_token(&self) {
        self.token.fetch_add(1, Ordering::SeqCst);
    }

    /// Trigger enhancement of one article. A second request for an id that
    /// is already in flight is rejected here, without a gateway call.
    /// Distinct ids proceed independently.
    pub async fn enhance_article(&self, id: &str) -> ActionOutcome {
        let Some(_guard) = BusyGuard::claim(&self.busy, id) else {
            warn!("enhance rejected, already in flight: {id}");
            return ActionOutcome::failed(ENHANCE_BUSY_MSG);
        };

        match self.gateway.process_article(id).await {
            Ok(()) => {
                info!("enhancement accepted for {id}");
                self.bump_token();
                ActionOutcome::ok(ENHANCE_OK_MSG)
            }
            Err(err) => {
                warn!("enhance {id} failed: {err}");
                ActionOutcome::failed(ENHANCE_FAILED_MSG)
            }
        }
    }

    /// Trigger the bulk scrape. The caller raises the store's scrape flag
    /// around this so the UI shows one unified busy state.
    pub async fn scrape_batch(&self) -> ActionOutcome {
        match self.gateway.scrape_init().await {
            Ok(()) => {
                info!("scrape batch accepted");
                self.bump_token();
                ActionOutcome::ok(SCRAPE_OK_MSG)
            }
            Err(err) => {
                warn!("scrape batch failed: {err}");
                ActionOutcome::failed(SCRAPE_FAILED_MSG)
            }
        }
    }
}

/// Holds an id in the busy set; released on drop so the flag clears even
/// when the enhancing task is cancelled.
struct BusyGuard {
    busy: Arc<Mutex<HashSet<String>>>,
    id: String,
}

impl BusyGuard {
    fn claim(busy: &Arc<Mutex<HashSet<String>>>, id: &str) -> Option<Self> {
        let mut set = busy.lock().expect("busy set poisoned");
        if !set.insert(id.to_string()) {
            return None;
        }
        Some(Self {
            busy: busy.clone(),
            id: id.to_string(),
        })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy
            .lock()
            .expect("busy set poisoned")
            .remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;
    use tokio::sync::Semaphore;

    use super::*;
    use crate::api::ApiError;
    use crate::models::article::Article;

    /// In-memory gateway. When `hold` is set, process/scrape calls signal
    /// `entered` and then wait for a `release` permit, so tests can observe
    /// the in-flight window.
    struct FakeGateway {
        calls: StdMutex<Vec<String>>,
        fail: bool,
        hold: bool,
        entered: Semaphore,
        release: Semaphore,
    }

    impl FakeGateway {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: StdMutex::new(Vec::new()),
                fail,
                hold: false,
                entered: Semaphore::new(0),
                release: Semaphore::new(0),
            })
        }

        fn holding() -> Arc<Self> {
            Arc::new(Self {
                calls: StdMutex::new(Vec::new()),
                fail: false,
                hold: true,
                entered: Semaphore::new(0),
                release: Semaphore::new(0),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        async fn run(&self, call: String) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(call);
            if self.hold {
                self.entered.add_permits(1);
                let permit = self.release.acquire().await.unwrap();
                permit.forget();
            }
            if self.fail {
                Err(ApiError::Network("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ArticleGateway for FakeGateway {
        async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
            self.run("list".into()).await.map(|_| Vec::new())
        }

        async fn get_article(&self, _id: &str) -> Result<Article, ApiError> {
            unimplemented!("not used by orchestrator tests")
        }

        async fn process_article(&self, id: &str) -> Result<(), ApiError> {
            self.run(format!("process:{id}")).await
        }

        async fn scrape_init(&self) -> Result<(), ApiError> {
            self.run("scrape".into()).await
        }

        async fn update_article(
            &self,
            _id: &str,
            _patch: &serde_json::Value,
        ) -> Result<(), ApiError> {
            unimplemented!("not used by orchestrator tests")
        }

        async fn delete_article(&self, _id: &str) -> Result<(), ApiError> {
            unimplemented!("not used by orchestrator tests")
        }
    }

    #[tokio::test]
    async fn successful_enhance_bumps_token_once() {
        let gateway = FakeGateway::new(false);
        let orch = Orchestrator::new(gateway.clone());

        let outcome = orch.enhance_article("a1").await;
        assert!(outcome.success);
        assert_eq!(outcome.message, ENHANCE_OK_MSG);
        assert_eq!(orch.refresh_token(), 1);
        assert!(!orch.is_busy("a1"));
        assert_eq!(gateway.calls(), vec!["process:a1"]);
    }

    #[tokio::test]
    async fn failed_enhance_leaves_token_unchanged() {
        let gateway = FakeGateway::new(true);
        let orch = Orchestrator::new(gateway.clone());

        let outcome = orch.enhance_article("a1").await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, ENHANCE_FAILED_MSG);
        assert_eq!(orch.refresh_token(), 0);
        assert!(!orch.is_busy("a1"));
    }

    #[tokio::test]
    async fn duplicate_enhance_for_busy_id_is_rejected_without_gateway_call() {
        let gateway = FakeGateway::holding();
        let orch = Orchestrator::new(gateway.clone());

        let first = {
            let orch = orch.clone();
            tokio::spawn(async move { orch.enhance_article("a1").await })
        };
        // Wait until the first request is inside the gateway.
        gateway.entered.acquire().await.unwrap().forget();
        assert!(orch.is_busy("a1"));

        let second = orch.enhance_article("a1").await;
        assert!(!second.success);
        assert_eq!(second.message, ENHANCE_BUSY_MSG);
        assert_eq!(gateway.calls(), vec!["process:a1"]);

        gateway.release.add_permits(1);
        let first = first.await.unwrap();
        assert!(first.success);
        assert_eq!(orch.refresh_token(), 1);
        assert!(!orch.is_busy("a1"));
    }

    #[tokio::test]
    async fn distinct_ids_enhance_concurrently() {
        let gateway = FakeGateway::holding();
        let orch = Orchestrator::new(gateway.clone());

        let a = {
            let orch = orch.clone();
            tokio::spawn(async move { orch.enhance_article("a1").await })
        };
        let b = {
            let orch = orch.clone();
            tokio::spawn(async move { orch.enhance_article("a2").await })
        };

        // Both reach the gateway while the other is still in flight.
        gateway.entered.acquire_many(2).await.unwrap().forget();
        assert!(orch.is_busy("a1"));
        assert!(orch.is_busy("a2"));

        gateway.release.add_permits(2);
        assert!(a.await.unwrap().success);
        assert!(b.await.unwrap().success);
        assert_eq!(orch.refresh_token(), 2);

        let mut calls = gateway.calls();
        calls.sort();
        assert_eq!(calls, vec!["process:a1", "process:a2"]);
    }

    #[tokio::test]
    async fn successful_scrape_bumps_token_exactly_once() {
        let gateway = FakeGateway::new(false);
        let orch = Orchestrator::new(gateway.clone());

        let outcome = orch.scrape_batch().await;
        assert!(outcome.success);
        assert_eq!(outcome.message, SCRAPE_OK_MSG);
        assert_eq!(orch.refresh_token(), 1);
        assert_eq!(gateway.calls(), vec!["scrape"]);
    }

    #[tokio::test]
    async fn failed_scrape_leaves_token_unchanged() {
        let gateway = FakeGateway::new(true);
        let orch = Orchestrator::new(gateway);

        let outcome = orch.scrape_batch().await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, SCRAPE_FAILED_MSG);
        assert_eq!(orch.refresh_token(), 0);
    }

    #[tokio::test]
    async fn busy_flag_clears_when_the_enhancing_task_is_dropped() {
        let gateway = FakeGateway::holding();
        let orch = Orchestrator::new(gateway.clone());

        let task = {
            let orch = orch.clone();
            tokio::spawn(async move { orch.enhance_article("a1").await })
        };
        gateway.entered.acquire().await.unwrap().forget();
        assert!(orch.is_busy("a1"));

        task.abort();
        let _ = task.await;
        assert!(!orch.is_busy("a1"));
        assert_eq!(orch.refresh_token(), 0);
    }
}
