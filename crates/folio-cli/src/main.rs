//! Folio - portfolio engine
//!
//! This binary loads the live repository feed for one account and renders
//! the portfolio page, optionally keeping the testimonial carousel running.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use folio_core::config::FolioConfig;
use folio_core::feed::GitHubSource;
use folio_core::page::PageView;

mod args;
mod logging;
mod render;

use args::{Args, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    logging::init(&args.log_level, args.log_json)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting folio");

    // Load configuration
    let mut config = if let Some(config_path) = &args.config {
        FolioConfig::load_from(config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?
    } else {
        FolioConfig::load().context("failed to load configuration")?
    };

    if let Some(handle) = args.handle {
        config.feed.handle = handle;
        config.validate().context("invalid --handle")?;
    }

    tracing::debug!(
        handle = %config.feed.handle,
        api = %config.feed.api_base_url,
        "configuration loaded"
    );

    let source = GitHubSource::from_config(&config.feed).context("failed to create API client")?;
    let page = PageView::mount(&config, Arc::new(source)).context("failed to mount page")?;
    let snapshot = page.ready().await;

    match args.format {
        OutputFormat::Text => print!("{}", render::page(&snapshot)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).context("failed to serialize page")?
        ),
    }

    if args.rotate > 0 {
        rotate_testimonials(&page, args.rotate).await;
    }

    if let Some(error) = snapshot.projects.error {
        bail!(error);
    }

    tracing::info!("folio done");
    Ok(())
}

/// Print each testimonial the carousel advances to, `ticks` times.
async fn rotate_testimonials(page: &PageView, ticks: u32) {
    let carousel = page.testimonials();
    if !carousel.is_rotating() {
        tracing::warn!(
            testimonials = carousel.len(),
            "fewer than two testimonials, nothing to rotate"
        );
        return;
    }

    let mut rx = carousel.subscribe();
    for _ in 0..ticks {
        if rx.changed().await.is_err() {
            break;
        }
        let state = rx.borrow_and_update().clone();
        if let Some(testimonial) = state.current() {
            println!(
                "[{}/{}] {}",
                state.index() + 1,
                state.len(),
                render::quote(testimonial)
            );
        }
    }
}
