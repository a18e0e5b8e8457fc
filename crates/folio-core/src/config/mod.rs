//! Configuration types and loading.
//!
//! This module provides configuration structures for folio: the repository
//! feed, the carousel timings and the hand-maintained profile content.

mod sections;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
pub use sections::{CarouselConfig, FeedConfig, MAX_PAGE_SIZE, ProfileConfig};
use url::Url;

use crate::error::{Error, Result};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Configuration file name looked up in the working and user config dirs.
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Main configuration for a folio page view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// Repository feed configuration.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Carousel timings.
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Portfolio content.
    #[serde(default)]
    pub profile: ProfileConfig,
}

impl FolioConfig {
    /// Load configuration from the default path.
    ///
    /// Default paths checked in order:
    /// 1. `$FOLIO_CONFIG` environment variable
    /// 2. `./folio.toml` (current directory)
    /// 3. `~/.config/folio/folio.toml` (Linux), or the platform config dir
    ///
    /// If no configuration file exists, a default one is written to the
    /// user's config directory and the defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing an existing config fails.
    /// If config creation fails, returns the defaults with a warning.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&path));
        }

        let local_config = PathBuf::from(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Self::load_from(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("folio").join(CONFIG_FILE_NAME);
            if user_config.exists() {
                return Self::load_from(&user_config);
            }

            if let Err(e) = Self::create_default_config_file(&user_config) {
                tracing::warn!(
                    "Failed to create default config at {}: {}. Using in-memory defaults.",
                    user_config.display(),
                    e
                );
            } else {
                tracing::info!("Created default config at {}", user_config.display());
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, parsing fails or the
    /// values are out of range.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default configuration, creating parent directories.
    fn create_default_config_file(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_content = toml::to_string_pretty(&Self::default())?;
        std::fs::write(path, toml_content)?;

        Ok(())
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        let feed = &self.feed;
        if feed.handle.trim().is_empty() {
            return Err(Error::InvalidConfig("feed.handle cannot be empty".to_string()));
        }
        if feed.page_size == 0 || feed.page_size > MAX_PAGE_SIZE {
            return Err(Error::InvalidConfig(format!(
                "feed.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                feed.page_size
            )));
        }
        if feed.featured_count == 0 {
            return Err(Error::InvalidConfig(
                "feed.featured_count must be at least 1".to_string(),
            ));
        }
        if feed.timeout_seconds == 0 {
            return Err(Error::InvalidConfig(
                "feed.timeout_seconds must be positive".to_string(),
            ));
        }
        match Url::parse(&feed.api_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(Error::InvalidConfig(format!(
                    "feed.api_base_url must use http or https, got '{}'",
                    url.scheme()
                )));
            }
            Err(e) => {
                return Err(Error::InvalidConfig(format!(
                    "feed.api_base_url '{}' is not a valid URL: {e}",
                    feed.api_base_url
                )));
            }
        }

        if self.carousel.testimonial_delay_ms == 0 || self.carousel.project_delay_ms == 0 {
            return Err(Error::InvalidConfig(
                "carousel delays must be positive".to_string(),
            ));
        }

        if let Some(skill) = self.profile.skills.iter().find(|s| s.value > 100) {
            return Err(Error::InvalidConfig(format!(
                "skill '{}' has value {} (max 100)",
                skill.label, skill.value
            )));
        }

        Ok(())
    }
}
