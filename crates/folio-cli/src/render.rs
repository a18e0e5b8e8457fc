//! Plain-text rendering of a page snapshot.

use std::fmt::Write;

use folio_core::content::Testimonial;
use folio_core::feed::RepositoryRecord;
use folio_core::page::PageSnapshot;

const LOADING_MESSAGE: &str = "Loading projects...";
const EMPTY_MESSAGE: &str = "No projects to show.";

/// Render every section of the page.
#[must_use]
pub fn page(snapshot: &PageSnapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Projects by @{}", snapshot.handle);
    let projects = &snapshot.projects;
    if projects.is_loading {
        let _ = writeln!(out, "  {LOADING_MESSAGE}");
    } else if let Some(error) = &projects.error {
        let _ = writeln!(out, "  {error}");
    } else if projects.items.is_empty() {
        let _ = writeln!(out, "  {EMPTY_MESSAGE}");
    } else {
        for record in &projects.items {
            out.push_str(&card(record));
        }
    }

    if let Some(record) = &snapshot.featured {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Featured: {} ({})",
            record.name,
            record.link_target()
        );
    }

    if let Some(testimonial) = &snapshot.testimonial {
        let _ = writeln!(out);
        let _ = writeln!(out, "Testimonials");
        let _ = writeln!(out, "  {}", quote(testimonial));
    }

    if !snapshot.posts.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Blog");
        for post in &snapshot.posts {
            let _ = writeln!(out, "  {}  {}  <{}>", post.date, post.title, post.href);
        }
    }

    if !snapshot.skills.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Skills");
        for skill in &snapshot.skills {
            let _ = writeln!(out, "  {:<16} {:>3}%", skill.label, skill.value);
        }
    }

    if !snapshot.education.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Education");
        for entry in &snapshot.education {
            let _ = writeln!(out, "  {} - {} ({})", entry.degree, entry.school, entry.period);
            if !entry.details.is_empty() {
                let _ = writeln!(out, "    {}", entry.details);
            }
        }
    }

    if !snapshot.certifications.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Certifications");
        for cert in &snapshot.certifications {
            let _ = writeln!(out, "  {} - {}, {}", cert.name, cert.issuer, cert.year);
        }
    }

    if !snapshot.socials.is_empty() {
        let _ = writeln!(out);
        let labels: Vec<String> = snapshot
            .socials
            .iter()
            .map(|s| format!("{} <{}>", s.label, s.href))
            .collect();
        let _ = writeln!(out, "Elsewhere: {}", labels.join(", "));
    }

    out
}

/// One project card.
#[must_use]
pub fn card(record: &RepositoryRecord) -> String {
    let mut out = String::new();
    if record.has_language() {
        let _ = writeln!(out, "  {} [{}]", record.name, record.language);
    } else {
        let _ = writeln!(out, "  {}", record.name);
    }
    let _ = writeln!(out, "    {}", record.description);
    let _ = write!(out, "    Code: {}", record.html_url);
    if record.has_homepage() {
        let _ = write!(out, "  Live: {}", record.homepage);
    }
    let _ = writeln!(out, "  Updated {}", record.updated_date());
    out
}

/// A testimonial on one line.
#[must_use]
pub fn quote(testimonial: &Testimonial) -> String {
    format!(
        "\"{}\" - {}, {}",
        testimonial.text, testimonial.name, testimonial.role
    )
}
