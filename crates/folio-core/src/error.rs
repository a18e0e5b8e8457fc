//! Error types for folio-core.
//!
//! This module defines the canonical error type for the library. Feed
//! failures have their own [`FetchError`] so the presentation layer can
//! surface a single human-readable message without matching on variants.

use std::path::PathBuf;
use std::time::Duration;

/// Message shown when the repository listing cannot be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load repositories";

/// The outbound repository listing read did not complete successfully.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    /// Human-readable description shown in place of the project grid.
    pub message: String,
    /// HTTP status of the response, when one was received.
    pub status: Option<u16>,
}

impl FetchError {
    /// Create a fetch error with no associated HTTP status.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Create a fetch error for a non-success HTTP status.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self {
            message: format!("{FETCH_FAILED_MESSAGE} (HTTP {status})"),
            status: Some(status),
        }
    }

    /// Create a fetch error for a transport or decoding failure.
    #[must_use]
    pub fn transport(detail: impl std::fmt::Display) -> Self {
        Self::new(format!("{FETCH_FAILED_MESSAGE}: {detail}"))
    }
}

/// The main error type for folio-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Repository listing could not be loaded.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Invalid configuration contents.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Carousel delay must be a positive duration.
    #[error("carousel delay must be positive, got {0:?}")]
    InvalidDelay(Duration),

    /// An operation needed a tokio runtime but none was running.
    #[error("no async runtime available: {0}")]
    Runtime(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// A specialized Result type for folio-core operations.
pub type Result<T> = std::result::Result<T, Error>;
