use folio_core::config::FolioConfig;
use folio_core::content::blog_digest;
use folio_core::feed::FilterPolicy;

use crate::common::test_utils::config_fixture_path;

#[test]
#[allow(clippy::expect_used)]
fn test_config_loading_minimal() {
    let config_path = config_fixture_path("minimal.toml");
    assert!(config_path.exists(), "Config fixture should exist");

    let config = FolioConfig::load_from(&config_path).expect("Failed to load config");

    assert_eq!(config.feed.handle, "Clementvsc");
    assert_eq!(config.feed.page_size, 100);
    assert_eq!(config.feed.filter, FilterPolicy::ArchivedAndForks);
    assert_eq!(config.carousel.project_delay_ms, 4000);
    assert_eq!(config.profile.skills.len(), 7);
    assert_eq!(config.profile.certifications.len(), 3);
}

#[test]
#[allow(clippy::expect_used)]
fn test_config_loading_full() {
    let config_path = config_fixture_path("full.toml");
    assert!(config_path.exists(), "Config fixture should exist");

    let config = FolioConfig::load_from(&config_path).expect("Failed to load config");

    assert_eq!(config.feed.filter, FilterPolicy::ArchivedOnly);
    assert_eq!(config.feed.featured_count, 4);
    assert_eq!(config.carousel.testimonial_delay_ms, 5200);
    assert_eq!(config.profile.testimonials.len(), 2);
    assert_eq!(config.profile.socials[0].label, "GitHub");
    assert_eq!(config.profile.skills[0].value, 90);
    assert_eq!(config.profile.education[0].degree, "B.S. in Computer Science");
    assert_eq!(config.profile.certifications.len(), 1);
    assert_eq!(config.profile.certifications[0].issuer, "Scrum.org");

    let digest = blog_digest(&config.profile.posts, config.profile.digest_size);
    let titles: Vec<&str> = digest.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Animating React Apps with Framer Motion",
            "Scaling Next.js Projects: Patterns that Work",
        ]
    );
}
