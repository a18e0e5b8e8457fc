//! Mounted feed state exposed to the presentation layer.

use std::sync::Arc;

use serde::Serialize;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::{Error, FetchError, Result};
use crate::feed::loader::FeedLoader;
use crate::feed::record::RepositoryRecord;

/// What the project grid renders: the loaded items, a loading flag, or an
/// error message in place of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedState {
    /// Filtered repositories, most recently updated first.
    pub items: Vec<RepositoryRecord>,
    /// True until the single load completes.
    pub is_loading: bool,
    /// Human-readable failure message.
    pub error: Option<String>,
}

impl FeedState {
    /// The state shown while the request is in flight.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            items: Vec::new(),
            is_loading: true,
            error: None,
        }
    }

    /// A successful load. An empty list is still a success.
    #[must_use]
    pub const fn loaded(items: Vec<RepositoryRecord>) -> Self {
        Self {
            items,
            is_loading: false,
            error: None,
        }
    }

    /// A terminal failure.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error: Some(message.into()),
        }
    }

    /// The first `n` items, used for the featured highlight reel.
    #[must_use]
    pub fn featured(&self, n: usize) -> &[RepositoryRecord] {
        &self.items[..n.min(self.items.len())]
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::loading()
    }
}

impl From<std::result::Result<Vec<RepositoryRecord>, FetchError>> for FeedState {
    fn from(result: std::result::Result<Vec<RepositoryRecord>, FetchError>) -> Self {
        match result {
            Ok(items) => Self::loaded(items),
            Err(e) => Self::failed(e.message),
        }
    }
}

/// A feed mounted on a page view.
///
/// Mounting starts one load in the background. If the view is unmounted
/// before the load finishes, the result is discarded.
#[derive(Debug)]
pub struct FeedView {
    state: Arc<watch::Sender<FeedState>>,
    task: JoinHandle<()>,
}

impl FeedView {
    /// Start loading `handle` and return immediately in the loading state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] when called outside a tokio runtime.
    pub fn mount(loader: FeedLoader, handle: impl Into<String>) -> Result<Self> {
        Self::mount_with(loader, handle, |_| {})
    }

    /// Like [`FeedView::mount`], running `on_settled` with the final state
    /// just before it is published. The hook is skipped if the view was
    /// unmounted first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] when called outside a tokio runtime.
    pub fn mount_with<F>(
        loader: FeedLoader,
        handle: impl Into<String>,
        on_settled: F,
    ) -> Result<Self>
    where
        F: FnOnce(&FeedState) + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|e| Error::Runtime(e.to_string()))?;
        let handle = handle.into();
        let (tx, _) = watch::channel(FeedState::loading());
        let state = Arc::new(tx);
        let mounted = Arc::downgrade(&state);

        let task = runtime.spawn(async move {
            let result = loader.load(&handle).await;
            if let Err(e) = &result {
                warn!(handle = %handle, error = %e, "repository feed failed to load");
            }

            let Some(state) = mounted.upgrade() else {
                debug!(handle = %handle, "feed view unmounted before load finished, discarding result");
                return;
            };
            let settled = FeedState::from(result);
            on_settled(&settled);
            state.send_replace(settled);
        });

        Ok(Self { state, task })
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// Whether the load is still in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    /// Receiver notified when the load completes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    /// Wait for the load to finish and return the resulting state.
    pub async fn loaded(&self) -> FeedState {
        let mut rx = self.state.subscribe();
        match rx.wait_for(|s| !s.is_loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }

    /// Tear the view down.
    ///
    /// The load keeps running to completion but its result is dropped. The
    /// returned handle resolves once it has.
    #[must_use = "the handle can be awaited to observe the discarded load"]
    pub fn unmount(self) -> JoinHandle<()> {
        let Self { state, task } = self;
        drop(state);
        task
    }
}
