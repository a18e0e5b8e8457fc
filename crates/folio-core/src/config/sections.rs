//! Configuration sections for the feed, the carousels and profile content.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::{
    self, BlogPost, Certification, Education, Skill, SocialLink, Testimonial,
};
use crate::feed::FilterPolicy;

/// Largest page the listing endpoint will return.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Repository feed settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedConfig {
    /// Account whose repositories are listed.
    #[serde(default = "default_handle")]
    pub handle: String,

    /// Number of repositories requested (1 to 100).
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Root of the GitHub-compatible REST API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Which repositories are hidden.
    #[serde(default)]
    pub filter: FilterPolicy,

    /// How many of the most recent repositories the featured carousel shows.
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            handle: default_handle(),
            page_size: default_page_size(),
            api_base_url: default_api_base_url(),
            filter: FilterPolicy::default(),
            featured_count: default_featured_count(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_handle() -> String {
    "Clementvsc".to_string()
}

const fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_featured_count() -> usize {
    6
}

const fn default_timeout_seconds() -> u64 {
    10
}

/// Rotation speed of the two carousels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselConfig {
    /// Delay between testimonial advances, in milliseconds.
    #[serde(default = "default_testimonial_delay_ms")]
    pub testimonial_delay_ms: u64,

    /// Delay between featured project advances, in milliseconds.
    #[serde(default = "default_project_delay_ms")]
    pub project_delay_ms: u64,
}

impl CarouselConfig {
    /// Testimonial rotation delay.
    #[must_use]
    pub const fn testimonial_delay(&self) -> Duration {
        Duration::from_millis(self.testimonial_delay_ms)
    }

    /// Featured project rotation delay.
    #[must_use]
    pub const fn project_delay(&self) -> Duration {
        Duration::from_millis(self.project_delay_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            testimonial_delay_ms: default_testimonial_delay_ms(),
            project_delay_ms: default_project_delay_ms(),
        }
    }
}

const fn default_testimonial_delay_ms() -> u64 {
    5000
}

const fn default_project_delay_ms() -> u64 {
    4000
}

/// Hand-maintained portfolio content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Number of posts shown in the blog digest.
    #[serde(default = "default_digest_size")]
    pub digest_size: usize,

    /// Testimonials, in rotation order.
    #[serde(default = "content::default_testimonials")]
    pub testimonials: Vec<Testimonial>,

    /// Published articles.
    #[serde(default = "content::default_posts")]
    pub posts: Vec<BlogPost>,

    /// Social profile links.
    #[serde(default = "content::default_socials")]
    pub socials: Vec<SocialLink>,

    /// Skill bars.
    #[serde(default = "content::default_skills")]
    pub skills: Vec<Skill>,

    /// Schools and programmes, most recent first.
    #[serde(default = "content::default_education")]
    pub education: Vec<Education>,

    /// Certifications, most recent first.
    #[serde(default = "content::default_certifications")]
    pub certifications: Vec<Certification>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            digest_size: default_digest_size(),
            testimonials: content::default_testimonials(),
            posts: content::default_posts(),
            socials: content::default_socials(),
            skills: content::default_skills(),
            education: content::default_education(),
            certifications: content::default_certifications(),
        }
    }
}

const fn default_digest_size() -> usize {
    3
}
