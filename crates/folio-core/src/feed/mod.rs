//! Repository feed.
//!
//! Retrieves the public repositories of one account, normalizes them into
//! display records, hides archived (and optionally forked) entries and
//! exposes `{items, is_loading, error}` to the presentation layer.
//!
//! - [`record`] - raw and normalized repository shapes, filter policy
//! - [`source`] - the listing endpoint seam and its GitHub implementation
//! - [`loader`] - one-shot fetch + normalize
//! - [`view`] - mounted, observable feed state

pub mod loader;
pub mod record;
pub mod source;
pub mod view;

pub use loader::FeedLoader;
pub use record::{
    FilterPolicy, PLACEHOLDER_DESCRIPTION, RawRepository, RepositoryRecord, normalize,
};
pub use source::{GitHubSource, RepositorySource};
pub use view::{FeedState, FeedView};
