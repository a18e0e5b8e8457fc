//! Static portfolio content: testimonials, blog posts, social links, skills,
//! education and certifications.
//!
//! These come from configuration rather than the network and are rendered
//! next to the repository feed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A quote from a past collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    /// Who said it.
    pub name: String,
    /// Their role and organisation.
    pub role: String,
    /// The quote itself.
    pub text: String,
    /// Avatar image path or URL.
    #[serde(default)]
    pub avatar: String,
}

/// A link to a published article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlogPost {
    /// Article title.
    pub title: String,
    /// Where the article lives.
    pub href: String,
    /// Publication date.
    pub date: NaiveDate,
}

/// A profile link shown in the social strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Display label.
    pub label: String,
    /// Target URL.
    pub href: String,
}

/// A self-assessed skill level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    /// Skill name.
    pub label: String,
    /// Percentage in `0..=100`.
    pub value: u8,
}

/// A school or programme attended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Education {
    /// Institution name.
    pub school: String,
    /// Degree or programme.
    pub degree: String,
    /// Free-form attendance period, e.g. `2018 - 2021`.
    pub period: String,
    /// Short summary of the focus.
    #[serde(default)]
    pub details: String,
}

/// A professional certification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Certification {
    /// Certification title.
    pub name: String,
    /// Issuing body.
    pub issuer: String,
    /// Year obtained.
    pub year: String,
}

/// The `n` most recent posts, newest first.
///
/// Posts sharing a date keep their configured order.
#[must_use]
pub fn blog_digest(posts: &[BlogPost], n: usize) -> Vec<BlogPost> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

pub(crate) fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Jane Doe".to_string(),
            role: "Product Manager, Acme Inc.".to_string(),
            text: "Delivered beyond expectations. Clear communication and pixel-perfect implementation.".to_string(),
            avatar: "/avatar1.png".to_string(),
        },
        Testimonial {
            name: "John Smith".to_string(),
            role: "Tech Lead, Startup Co.".to_string(),
            text: "Great engineering instincts and strong UI/UX empathy. Would gladly work together again.".to_string(),
            avatar: "/avatar2.png".to_string(),
        },
    ]
}

pub(crate) fn default_posts() -> Vec<BlogPost> {
    [
        ("Animating React Apps with Framer Motion", "https://dev.to/", (2024, 10, 10)),
        ("Scaling Next.js Projects: Patterns that Work", "https://medium.com/", (2024, 8, 22)),
        ("TypeScript Tips for UI Engineers", "https://dev.to/", (2024, 6, 2)),
    ]
    .into_iter()
    .filter_map(|(title, href, (y, m, d))| {
        Some(BlogPost {
            title: title.to_string(),
            href: href.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d)?,
        })
    })
    .collect()
}

pub(crate) fn default_socials() -> Vec<SocialLink> {
    [
        ("LinkedIn", "https://www.linkedin.com/in/clementvsc"),
        ("GitHub", "https://github.com/Clementvsc"),
        ("Dev.to", "https://dev.to/"),
        ("Medium", "https://medium.com/@"),
        ("Stack Overflow", "https://stackoverflow.com/users/"),
        ("Twitter", "https://twitter.com/"),
        ("Email", "mailto:hello@example.com"),
    ]
    .into_iter()
    .map(|(label, href)| SocialLink {
        label: label.to_string(),
        href: href.to_string(),
    })
    .collect()
}

pub(crate) fn default_skills() -> Vec<Skill> {
    [
        ("TypeScript", 90),
        ("React / Next.js", 92),
        ("Node.js", 85),
        ("Tailwind CSS", 88),
        ("Framer Motion", 80),
        ("Testing (Jest/RTL)", 76),
        ("Design Systems", 74),
    ]
    .into_iter()
    .map(|(label, value)| Skill {
        label: label.to_string(),
        value,
    })
    .collect()
}

pub(crate) fn default_education() -> Vec<Education> {
    vec![
        Education {
            school: "Université de Technologie".to_string(),
            degree: "B.S. in Computer Science".to_string(),
            period: "2018 - 2021".to_string(),
            details: "Focused on full-stack development, UI engineering, and HCI.".to_string(),
        },
        Education {
            school: "Lycée Scientifique".to_string(),
            degree: "Classe Prépa (MPSI/MP)".to_string(),
            period: "2016 - 2018".to_string(),
            details: "Mathematics, physics, and computer science foundation.".to_string(),
        },
    ]
}

pub(crate) fn default_certifications() -> Vec<Certification> {
    [
        ("AWS Certified Cloud Practitioner", "Amazon Web Services", "2024"),
        ("Google Analytics Individual Qualification", "Google", "2023"),
        ("Scrum Master", "Scrum.org", "2022"),
    ]
    .into_iter()
    .map(|(name, issuer, year)| Certification {
        name: name.to_string(),
        issuer: issuer.to_string(),
        year: year.to_string(),
    })
    .collect()
}
