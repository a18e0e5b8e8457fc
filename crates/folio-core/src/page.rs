//! A single page view: one feed, two carousels, the profile content.
//!
//! Everything a page renders is owned here and scoped to the view's
//! lifetime. Dropping the view cancels the carousel timers and discards a
//! feed load that has not finished yet.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::carousel::Carousel;
use crate::config::FolioConfig;
use crate::content::{
    self, BlogPost, Certification, Education, Skill, SocialLink, Testimonial,
};
use crate::error::Result;
use crate::feed::{FeedLoader, FeedState, FeedView, RepositoryRecord, RepositorySource};

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    /// Account whose repositories are shown.
    pub handle: String,
    /// The project grid.
    pub projects: FeedState,
    /// Featured project in focus.
    pub featured: Option<RepositoryRecord>,
    /// Index of the featured project in focus.
    pub featured_index: usize,
    /// Testimonial in focus.
    pub testimonial: Option<Testimonial>,
    /// Index of the testimonial in focus.
    pub testimonial_index: usize,
    /// Blog digest, newest first.
    pub posts: Vec<BlogPost>,
    /// Social links.
    pub socials: Vec<SocialLink>,
    /// Skill bars.
    pub skills: Vec<Skill>,
    /// Schools and programmes.
    pub education: Vec<Education>,
    /// Certifications.
    pub certifications: Vec<Certification>,
}

/// A mounted portfolio page.
#[derive(Debug)]
pub struct PageView {
    handle: String,
    feed: FeedView,
    testimonials: Carousel<Testimonial>,
    featured: Arc<Carousel<RepositoryRecord>>,
    posts: Vec<BlogPost>,
    socials: Vec<SocialLink>,
    skills: Vec<Skill>,
    education: Vec<Education>,
    certifications: Vec<Certification>,
}

impl PageView {
    /// Mount a page: start the feed load and both carousels.
    ///
    /// The featured carousel starts empty and is filled with the most
    /// recently updated repositories once the feed settles.
    ///
    /// # Errors
    ///
    /// Returns an error when called outside a tokio runtime or when a
    /// carousel delay is zero.
    pub fn mount(config: &FolioConfig, source: Arc<dyn RepositorySource>) -> Result<Self> {
        let handle = config.feed.handle.clone();
        let featured_count = config.feed.featured_count;

        let testimonials = Carousel::start(
            config.profile.testimonials.clone(),
            config.carousel.testimonial_delay(),
        )?;
        let featured = Arc::new(Carousel::start(
            Vec::<RepositoryRecord>::new(),
            config.carousel.project_delay(),
        )?);

        let loader = FeedLoader::from_config(source, &config.feed);
        let reel = Arc::downgrade(&featured);
        let feed = FeedView::mount_with(loader, handle.clone(), move |state| {
            if let Some(reel) = reel.upgrade() {
                reel.set_items(state.featured(featured_count).to_vec());
            }
        })?;

        info!(handle = %handle, "page view mounted");

        Ok(Self {
            handle,
            feed,
            testimonials,
            featured,
            posts: content::blog_digest(&config.profile.posts, config.profile.digest_size),
            socials: config.profile.socials.clone(),
            skills: config.profile.skills.clone(),
            education: config.profile.education.clone(),
            certifications: config.profile.certifications.clone(),
        })
    }

    /// Account whose repositories are shown.
    #[must_use]
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// The repository feed.
    #[must_use]
    pub const fn feed(&self) -> &FeedView {
        &self.feed
    }

    /// The testimonial carousel.
    #[must_use]
    pub const fn testimonials(&self) -> &Carousel<Testimonial> {
        &self.testimonials
    }

    /// The featured project carousel.
    #[must_use]
    pub fn featured(&self) -> &Carousel<RepositoryRecord> {
        &self.featured
    }

    /// Blog digest, newest first.
    #[must_use]
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Capture the current state of every section.
    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            handle: self.handle.clone(),
            projects: self.feed.state(),
            featured: self.featured.current(),
            featured_index: self.featured.index(),
            testimonial: self.testimonials.current(),
            testimonial_index: self.testimonials.index(),
            posts: self.posts.clone(),
            socials: self.socials.clone(),
            skills: self.skills.clone(),
            education: self.education.clone(),
            certifications: self.certifications.clone(),
        }
    }

    /// Wait for the feed to settle, then capture the page.
    pub async fn ready(&self) -> PageSnapshot {
        self.feed.loaded().await;
        self.snapshot()
    }
}

impl Drop for PageView {
    fn drop(&mut self) {
        debug!(handle = %self.handle, "page view unmounted");
    }
}
