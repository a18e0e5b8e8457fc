//! # folio-core
//!
//! Core library for the folio portfolio engine.
//!
//! A portfolio page shows a live list of the owner's public repositories and
//! two rotating showcases (testimonials and featured projects). This crate
//! holds the logic behind those pieces; rendering is left to the caller.
//!
//! ## Architecture
//!
//! - [`feed`] - repository listing retrieval, normalization and mounted state
//! - [`carousel`] - auto-advancing carousels with manual override
//! - [`content`] - testimonials, blog posts and other static profile content
//! - [`page`] - a page view tying the feed, carousels and content together
//! - [`config`] - configuration types and loading
//! - [`error`] - error types for the library
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use folio_core::{FolioConfig, GitHubSource, PageView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), folio_core::Error> {
//!     let config = FolioConfig::load()?;
//!     let source = Arc::new(GitHubSource::from_config(&config.feed)?);
//!     let page = PageView::mount(&config, source)?;
//!     let snapshot = page.ready().await;
//!     println!("{} repositories", snapshot.projects.items.len());
//!     Ok(())
//! }
//! ```

pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod page;

pub use carousel::{Carousel, CarouselState};
pub use config::FolioConfig;
pub use error::{Error, FetchError, Result};
pub use feed::{
    FeedLoader, FeedState, FeedView, FilterPolicy, GitHubSource, RepositoryRecord,
    RepositorySource,
};
pub use page::{PageSnapshot, PageView};
