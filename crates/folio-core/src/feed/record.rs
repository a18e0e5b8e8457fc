//! Repository records: the raw listing shape and its normalized display form.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Description shown for repositories that have none.
pub const PLACEHOLDER_DESCRIPTION: &str = "No description provided.";

/// One repository entry exactly as the listing endpoint returns it.
///
/// Only the fields the feed consumes are declared; everything else in the
/// response body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawRepository {
    /// Stable numeric identifier.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// `owner/name`.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Free-form description, often null.
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical web URL.
    pub html_url: String,
    /// Project homepage, null or empty when unset.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Primary language label.
    #[serde(default)]
    pub language: Option<String>,
    /// Whether the repository is archived.
    #[serde(default)]
    pub archived: bool,
    /// Whether the repository is a fork.
    #[serde(default)]
    pub fork: bool,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// A normalized, display-ready repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Identifier, unique within one fetch result.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// `owner/name`.
    pub full_name: String,
    /// Never empty.
    pub description: String,
    /// Canonical web URL.
    pub html_url: String,
    /// Empty when the repository has no homepage.
    pub homepage: String,
    /// Empty when the listing reports no language.
    pub language: String,
    /// Archived flag.
    pub archived: bool,
    /// Fork flag.
    pub fork: bool,
    /// Last update time, serialized as RFC 3339.
    pub updated_at: DateTime<Utc>,
}

impl RepositoryRecord {
    /// Whether a homepage is set.
    #[must_use]
    pub fn has_homepage(&self) -> bool {
        !self.homepage.is_empty()
    }

    /// Whether a primary language is known.
    #[must_use]
    pub fn has_language(&self) -> bool {
        !self.language.is_empty()
    }

    /// Where the card title links to: the homepage if set, else the code.
    #[must_use]
    pub fn link_target(&self) -> &str {
        if self.has_homepage() {
            &self.homepage
        } else {
            &self.html_url
        }
    }

    /// Calendar date of the last update.
    #[must_use]
    pub fn updated_date(&self) -> NaiveDate {
        self.updated_at.date_naive()
    }
}

impl From<RawRepository> for RepositoryRecord {
    fn from(raw: RawRepository) -> Self {
        let full_name = raw
            .full_name
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| raw.name.clone());

        Self {
            id: raw.id,
            name: raw.name,
            full_name,
            description: non_blank(raw.description)
                .unwrap_or_else(|| PLACEHOLDER_DESCRIPTION.to_string()),
            html_url: raw.html_url,
            homepage: non_blank(raw.homepage).unwrap_or_default(),
            language: non_blank(raw.language).unwrap_or_default(),
            archived: raw.archived,
            fork: raw.fork,
            updated_at: raw.updated_at,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Which repositories are hidden from the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterPolicy {
    /// Hide archived repositories only.
    ArchivedOnly,
    /// Hide archived repositories and forks.
    #[default]
    ArchivedAndForks,
}

impl FilterPolicy {
    /// Whether a repository survives this policy.
    #[must_use]
    pub const fn keeps(self, archived: bool, fork: bool) -> bool {
        match self {
            Self::ArchivedOnly => !archived,
            Self::ArchivedAndForks => !archived && !fork,
        }
    }
}

/// Normalize a raw listing into display records.
///
/// Keeps the listing order. For a repeated identifier only the first entry
/// counts, so an excluded first entry excludes its duplicates too.
#[must_use]
pub fn normalize(raw: Vec<RawRepository>, policy: FilterPolicy) -> Vec<RepositoryRecord> {
    let mut seen = HashSet::with_capacity(raw.len());

    raw.into_iter()
        .filter(|r| seen.insert(r.id))
        .filter(|r| policy.keeps(r.archived, r.fork))
        .map(RepositoryRecord::from)
        .collect()
}
