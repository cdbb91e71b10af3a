//! Fetch lifecycle state and the race-safe page fetch controller.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use super::envelope::{Page, PageQuery};
use super::error::FetchError;

/// Boxed future returned by an injected page fetcher.
pub type PageFuture<T> = Pin<Box<dyn Future<Output = Result<Page<T>, FetchError>> + Send>>;

type Fetcher<T> = Box<dyn Fn(PageQuery) -> PageFuture<T> + Send + Sync>;

/// Client-side lifecycle of one paginated query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// No query issued yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request resolved with a page.
    Loaded(Page<T>),
    /// The latest request failed.
    Failed(FetchError),
}

impl<T> FetchState<T> {
    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The loaded page, if any.
    pub fn page(&self) -> Option<&Page<T>> {
        match self {
            FetchState::Loaded(page) => Some(page),
            _ => None,
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

struct Slot<T> {
    state: FetchState<T>,
    query: Option<PageQuery>,
    generation: u64,
}

/// Owns one [`FetchState`] for an injected list-fetch capability and
/// guarantees that only the result of the most recently issued request is
/// ever applied.
///
/// Every issued request is stamped with a generation number; a resolving
/// request whose stamp is no longer the latest is discarded without
/// touching the state. Responses may therefore arrive in any order.
pub struct PageFetchController<T> {
    fetcher: Fetcher<T>,
    slot: Mutex<Slot<T>>,
}

impl<T: Clone> PageFetchController<T> {
    /// Create a controller around an injected fetch capability.
    pub fn new<F>(fetcher: F) -> Self
    where
        F: Fn(PageQuery) -> PageFuture<T> + Send + Sync + 'static,
    {
        Self {
            fetcher: Box::new(fetcher),
            slot: Mutex::new(Slot {
                state: FetchState::Idle,
                query: None,
                generation: 0,
            }),
        }
    }

    /// Issue a query unless it matches the last issued one.
    ///
    /// An unchanged query is a no-op while the previous attempt did not
    /// fail; after a failure, re-submitting the same query is the manual
    /// retry path.
    pub async fn submit(&self, query: PageQuery) {
        let Some(issued) = self.begin(query.clone(), false) else {
            return;
        };
        self.run(query, issued).await;
    }

    /// Re-issue the last query unconditionally. No-op before any query.
    pub async fn retry(&self) {
        let Some(query) = self.query() else {
            return;
        };
        let Some(issued) = self.begin(query.clone(), true) else {
            return;
        };
        self.run(query, issued).await;
    }

    /// Navigate to a page, preserving size and search.
    pub async fn set_page(&self, page: usize) {
        let query = self.query().unwrap_or_default().with_page(page);
        self.submit(query).await;
    }

    /// Change the page size and reset to the first page.
    pub async fn set_page_size(&self, size: usize) {
        let query = self.query().unwrap_or_default().with_size(size);
        self.submit(query).await;
    }

    /// Change the search filter and reset to the first page.
    pub async fn set_search(&self, search: Option<String>) {
        let query = self.query().unwrap_or_default().with_search(search);
        self.submit(query).await;
    }

    /// Snapshot of the current lifecycle state.
    pub fn state(&self) -> FetchState<T> {
        self.lock().state.clone()
    }

    /// The last issued query, if any.
    pub fn query(&self) -> Option<PageQuery> {
        self.lock().query.clone()
    }

    /// Record a new request and return its generation stamp, or `None`
    /// when the query deduplicates away.
    fn begin(&self, query: PageQuery, force: bool) -> Option<u64> {
        let mut slot = self.lock();

        let retryable = matches!(slot.state, FetchState::Failed(_));
        if !force && !retryable && slot.query.as_ref() == Some(&query) {
            return None;
        }

        slot.query = Some(query);
        slot.generation += 1;
        slot.state = FetchState::Loading;
        Some(slot.generation)
    }

    /// Drive one request to resolution, applying the result only when its
    /// generation is still the latest.
    async fn run(&self, query: PageQuery, issued: u64) {
        debug!(
            page = query.page,
            size = query.size,
            generation = issued,
            "issuing page fetch"
        );

        let result = (self.fetcher)(query).await;

        let mut slot = self.lock();
        if slot.generation != issued {
            debug!(
                generation = issued,
                latest = slot.generation,
                "discarding superseded page response"
            );
            return;
        }

        slot.state = match result {
            Ok(page) => FetchState::Loaded(page),
            Err(error) => FetchState::Failed(error),
        };
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        // Never held across an await, so the only poisoning source is a
        // panic inside one of these short critical sections.
        self.slot.lock().expect("pagination state lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use tokio::time::sleep;

    use super::*;

    fn page_of(label: &str, query: &PageQuery) -> Page<String> {
        Page::new(vec![label.to_owned()], query.page, query.size, 40, 4)
    }

    fn controller_with_delays() -> Arc<PageFetchController<String>> {
        Arc::new(PageFetchController::new(|query: PageQuery| {
            Box::pin(async move {
                // Page 0 resolves long after page 1.
                let delay = if query.page == 0 { 100 } else { 10 };
                sleep(Duration::from_millis(delay)).await;
                Ok(page_of(&format!("item-{}", query.page), &query))
            }) as PageFuture<String>
        }))
    }

    #[tokio::test(start_paused = true)]
    async fn newer_query_wins_over_slower_earlier_response() {
        let controller = controller_with_delays();

        let slow = tokio::spawn({
            let controller = Arc::clone(&controller);
            async move { controller.submit(PageQuery::new(10)).await }
        });

        // Let the page-0 request get issued before superseding it.
        sleep(Duration::from_millis(1)).await;
        assert!(controller.state().is_loading());

        let fast = tokio::spawn({
            let controller = Arc::clone(&controller);
            async move { controller.submit(PageQuery::new(10).with_page(1)).await }
        });

        fast.await.expect("fast task");
        let state = controller.state();
        let page = state.page().expect("page 1 loaded");
        assert_eq!(page.page_index, 1);
        assert_eq!(page.items, vec!["item-1".to_owned()]);

        // The page-0 response resolves afterwards and must be discarded.
        slow.await.expect("slow task");
        let state = controller.state();
        let page = state.page().expect("still page 1");
        assert_eq!(page.page_index, 1);
        assert_eq!(controller.query(), Some(PageQuery::new(10).with_page(1)));
    }

    #[tokio::test]
    async fn unchanged_query_does_not_refetch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let controller = {
            let calls = Arc::clone(&calls);
            PageFetchController::new(move |query: PageQuery| {
                calls.fetch_add(1, Ordering::SeqCst);
                Box::pin(async move { Ok(page_of("item", &query)) }) as PageFuture<String>
            })
        };

        controller.submit(PageQuery::new(10)).await;
        controller.submit(PageQuery::new(10)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        controller.submit(PageQuery::new(10).with_page(1)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn resize_resets_to_first_page_before_fetching() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let controller = {
            let seen = Arc::clone(&seen);
            PageFetchController::new(move |query: PageQuery| {
                seen.lock().unwrap().push(query.clone());
                Box::pin(async move { Ok(page_of("item", &query)) }) as PageFuture<String>
            })
        };

        controller.submit(PageQuery::new(10).with_page(3)).await;
        controller.set_page_size(20).await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen[1].page, 0);
        assert_eq!(seen[1].size, 20);
    }

    #[tokio::test]
    async fn failure_surfaces_and_identical_resubmit_recovers() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let controller = {
            let attempts = Arc::clone(&attempts);
            PageFetchController::new(move |query: PageQuery| {
                let attempt = attempts.fetch_add(1, Ordering::SeqCst);
                Box::pin(async move {
                    if attempt == 0 {
                        Err(FetchError::Http {
                            status: 500,
                            message: "boom".to_owned(),
                        })
                    } else {
                        Ok(page_of("recovered", &query))
                    }
                }) as PageFuture<String>
            })
        };

        controller.submit(PageQuery::new(10)).await;
        let state = controller.state();
        let error = state.error().expect("failed state");
        assert_eq!(error.to_string(), "boom");
        assert_eq!(error.status(), Some(500));

        // Manual retry re-issues the identical query.
        controller.submit(PageQuery::new(10)).await;
        let state = controller.state();
        assert_eq!(
            state.page().expect("recovered").items,
            vec!["recovered".to_owned()]
        );
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn retry_reissues_without_a_prior_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let controller = {
            let calls = Arc::clone(&calls);
            PageFetchController::new(move |query: PageQuery| {
                calls.fetch_add(1, Ordering::SeqCst);
                Box::pin(async move { Ok(page_of("item", &query)) }) as PageFuture<String>
            })
        };

        controller.retry().await;
        assert_eq!(calls.load(Ordering::SeqCst), 0, "nothing to retry yet");

        controller.submit(PageQuery::new(10)).await;
        controller.retry().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
