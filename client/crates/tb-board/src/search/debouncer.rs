use crate::SearchState;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tb_gateway::SearchSource;
use tokio::sync::watch;
use tokio::task::JoinHandle;

type StateTx<S> = watch::Sender<SearchState<<S as SearchSource>::Item>>;

/// Turns keystroke-rate query changes into at most one remote search per
/// quiet window.
///
/// A pending or in-flight request is aborted whenever a newer query arrives,
/// and on [`SearchDebouncer::shutdown`] or drop, so a stale answer is never
/// published.
pub struct SearchDebouncer<S: SearchSource> {
    source: Arc<S>,
    window: Duration,
    state: Arc<StateTx<S>>,
    pending: Option<JoinHandle<()>>,
    last_query: Option<String>,
}

impl<S: SearchSource> SearchDebouncer<S> {
    pub fn new(source: Arc<S>, window: Duration) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);
        Self {
            source,
            window,
            state: Arc::new(state),
            pending: None,
            last_query: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState<S::Item>> {
        self.state.subscribe()
    }

    pub fn state(&self) -> SearchState<S::Item> {
        self.state.borrow().clone()
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Whether a scheduled or in-flight request has yet to finish
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Feed the current input. Call on every keystroke.
    ///
    /// A blank query lists everything immediately; anything else is searched
    /// once the input has been quiet for the window.
    pub fn search(&mut self, query: &str) {
        if query.trim().is_empty() {
            self.schedule(query, None);
        } else {
            self.schedule(query, Some(self.window));
        }
    }

    /// Search without waiting for the window (explicit submit).
    pub fn search_now(&mut self, query: &str) {
        self.schedule(query, None);
    }

    /// Run the last query again. Returns `false` if there is none.
    pub fn retry(&mut self) -> bool {
        let Some(query) = self.last_query.clone() else {
            return false;
        };
        self.schedule(&query, None);
        true
    }

    /// Abort any pending request. Nothing is published afterwards until the
    /// next `search`.
    pub fn shutdown(&mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    fn schedule(&mut self, query: &str, delay: Option<Duration>) {
        self.cancel();
        self.last_query = Some(query.to_string());

        let source = self.source.clone();
        let state = self.state.clone();
        let query = query.trim().to_string();

        self.pending = Some(tokio::spawn(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            run::<S>(source.as_ref(), &state, query).await;
        }));
    }
}

async fn run<S: SearchSource>(source: &S, state: &StateTx<S>, query: String) {
    state.send_replace(SearchState::Loading {
        query: query.clone(),
    });

    let result = if query.is_empty() {
        debug!("Listing all (empty query)");
        source.list_all().await
    } else {
        debug!("Searching for '{query}'");
        source.search(&query).await
    };

    let next = match result {
        Ok(items) => SearchState::Results { query, items },
        Err(err) => {
            warn!("Search for '{query}' failed: {err}");
            SearchState::Failed {
                query,
                message: err.user_message(),
            }
        }
    };
    state.send_replace(next);
}

impl<S: SearchSource> Drop for SearchDebouncer<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
