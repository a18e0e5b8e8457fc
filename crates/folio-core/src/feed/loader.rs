//! One-shot repository feed loading.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{FeedConfig, MAX_PAGE_SIZE};
use crate::error::FetchError;
use crate::feed::record::{FilterPolicy, RepositoryRecord, normalize};
use crate::feed::source::RepositorySource;

/// Fetches, normalizes and filters the repository listing of an account.
#[derive(Clone)]
pub struct FeedLoader {
    source: Arc<dyn RepositorySource>,
    page_size: u32,
    policy: FilterPolicy,
}

impl std::fmt::Debug for FeedLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedLoader")
            .field("source", &"<repository source>")
            .field("page_size", &self.page_size)
            .field("policy", &self.policy)
            .finish()
    }
}

impl FeedLoader {
    /// Create a loader with the largest page size and the default policy.
    #[must_use]
    pub fn new(source: Arc<dyn RepositorySource>) -> Self {
        Self {
            source,
            page_size: MAX_PAGE_SIZE,
            policy: FilterPolicy::default(),
        }
    }

    /// Create a loader using the page size and policy from configuration.
    #[must_use]
    pub fn from_config(source: Arc<dyn RepositorySource>, config: &FeedConfig) -> Self {
        Self::new(source)
            .with_page_size(config.page_size)
            .with_policy(config.filter)
    }

    /// Set the number of entries requested, clamped to `1..=100`.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Set which repositories are hidden.
    #[must_use]
    pub const fn with_policy(mut self, policy: FilterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Requested page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Active filter policy.
    #[must_use]
    pub const fn policy(&self) -> FilterPolicy {
        self.policy
    }

    /// Load the display-ready repositories of `handle`.
    ///
    /// Issues exactly one read against the source. The result keeps the
    /// listing order (most recently updated first).
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if `handle` is empty or the read fails.
    /// Failures are not retried.
    pub async fn load(&self, handle: &str) -> Result<Vec<RepositoryRecord>, FetchError> {
        let handle = handle.trim();
        if handle.is_empty() {
            return Err(FetchError::new("account handle cannot be empty"));
        }

        let raw = self.source.list_repositories(handle, self.page_size).await?;
        let total = raw.len();
        let records = normalize(raw, self.policy);

        debug!(
            handle,
            total,
            hidden = total - records.len(),
            policy = ?self.policy,
            "normalized repository listing"
        );
        info!(handle, count = records.len(), "repository feed loaded");
        Ok(records)
    }
}
