//! Remote repository listing access.
//!
//! [`RepositorySource`] is the seam between the feed and the network. The
//! production implementation, [`GitHubSource`], talks to a GitHub-compatible
//! `GET /users/{handle}/repos` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA};
use tracing::{debug, warn};
use url::Url;

use crate::config::FeedConfig;
use crate::error::{Error, FetchError, Result};
use crate::feed::record::RawRepository;

/// Media type requested from the listing endpoint.
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Sort order requested from the listing endpoint.
const SORT_BY_UPDATED: &str = "updated";

/// A service that lists the public repositories of an account.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// List up to `page_size` repositories for `handle`, most recently
    /// updated first.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the read fails for any reason.
    async fn list_repositories(
        &self,
        handle: &str,
        page_size: u32,
    ) -> std::result::Result<Vec<RawRepository>, FetchError>;
}

/// Listing source backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubSource {
    client: Client,
    base_url: Url,
}

impl GitHubSource {
    /// Create a source for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Fetch(FetchError::transport(e)))?;

        Ok(Self { client, base_url })
    }

    /// Create a source from the `[feed]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be created.
    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            Error::InvalidConfig(format!("invalid api_base_url '{}': {e}", config.api_base_url))
        })?;
        Self::new(base_url, Duration::from_secs(config.timeout_seconds))
    }

    /// Base URL requests are made against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the listing URL for a handle.
    fn listing_url(&self, handle: &str, page_size: u32) -> std::result::Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::new(format!("cannot build request URL from {}", self.base_url)))?
            .pop_if_empty()
            .extend(["users", handle, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &page_size.to_string())
            .append_pair("sort", SORT_BY_UPDATED);
        Ok(url)
    }
}

#[async_trait]
impl RepositorySource for GitHubSource {
    async fn list_repositories(
        &self,
        handle: &str,
        page_size: u32,
    ) -> std::result::Result<Vec<RawRepository>, FetchError> {
        let url = self.listing_url(handle, page_size)?;
        debug!(%url, "requesting repository listing");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "repository listing request failed");
                FetchError::transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "repository listing returned an error status");
            return Err(FetchError::status(status.as_u16()));
        }

        let repos = response
            .json::<Vec<RawRepository>>()
            .await
            .map_err(FetchError::transport)?;

        debug!(count = repos.len(), "received repository listing");
        Ok(repos)
    }
}
