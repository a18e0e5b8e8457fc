#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use folio_core::config::FolioConfig;
use folio_core::feed::{FeedLoader, FeedView, GitHubSource};
use folio_core::page::PageView;

use crate::common::mock_api::{MockApi, Reply};
use crate::common::test_utils::{repo_json, repos_fixture};

fn config_for(api: &MockApi) -> FolioConfig {
    let mut config = FolioConfig::default();
    config.feed.api_base_url.clone_from(&api.base_url);
    config.feed.featured_count = 2;
    config
}

#[tokio::test]
async fn test_page_renders_live_feed() {
    let api = MockApi::spawn(Reply::Json(repos_fixture())).await;
    let config = config_for(&api);
    let source = Arc::new(GitHubSource::from_config(&config.feed).unwrap());

    let page = PageView::mount(&config, source).unwrap();
    let snapshot = page.ready().await;

    assert!(!snapshot.projects.is_loading);
    assert!(snapshot.projects.error.is_none());
    assert_eq!(snapshot.projects.items.len(), 3);
    assert_eq!(page.featured().len(), 2);
    assert_eq!(snapshot.featured.map(|r| r.name), Some("folio".to_string()));
    assert_eq!(api.requests().len(), 1);
}

#[tokio::test]
async fn test_page_snapshot_serializes() {
    let api = MockApi::spawn(Reply::Json(serde_json::json!([repo_json(
        7, "solo", false, false
    )])))
    .await;
    let config = config_for(&api);
    let source = Arc::new(GitHubSource::from_config(&config.feed).unwrap());

    let page = PageView::mount(&config, source).unwrap();
    let value = serde_json::to_value(page.ready().await).unwrap();

    assert_eq!(value["handle"], "Clementvsc");
    assert_eq!(value["projects"]["is_loading"], false);
    assert!(value["projects"]["error"].is_null());
    assert_eq!(value["projects"]["items"][0]["name"], "solo");
    assert_eq!(
        value["projects"]["items"][0]["updated_at"],
        "2024-05-05T05:05:05Z"
    );
    assert_eq!(value["featured"]["id"], 7);
    assert_eq!(value["posts"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_page_with_failed_feed() {
    let api = MockApi::spawn(Reply::Status(500)).await;
    let config = config_for(&api);
    let source = Arc::new(GitHubSource::from_config(&config.feed).unwrap());

    let page = PageView::mount(&config, source).unwrap();
    let snapshot = page.ready().await;

    assert!(snapshot.projects.items.is_empty());
    assert_eq!(
        snapshot.projects.error.as_deref(),
        Some("Failed to load repositories (HTTP 500)")
    );
    assert!(snapshot.featured.is_none());
    assert!(snapshot.testimonial.is_some(), "testimonials do not depend on the feed");
}

#[tokio::test]
async fn test_unmount_while_request_in_flight() {
    let api = MockApi::spawn(Reply::Delayed(
        Duration::from_millis(200),
        repos_fixture(),
    ))
    .await;
    let config = config_for(&api);
    let source = Arc::new(GitHubSource::from_config(&config.feed).unwrap());

    let view = FeedView::mount(FeedLoader::from_config(source, &config.feed), "Clementvsc").unwrap();
    let mut rx = view.subscribe();

    let pending = view.unmount();
    pending.await.unwrap();

    assert_eq!(api.requests().len(), 1, "the request still went out");
    assert!(rx.borrow_and_update().is_loading);
    assert!(rx.borrow().items.is_empty());
    assert!(rx.changed().await.is_err(), "no update reached the unmounted view");
}

#[tokio::test]
async fn test_dropping_page_mid_load() {
    let api = MockApi::spawn(Reply::Delayed(
        Duration::from_millis(200),
        repos_fixture(),
    ))
    .await;
    let config = config_for(&api);
    let source = Arc::new(GitHubSource::from_config(&config.feed).unwrap());

    let page = PageView::mount(&config, source).unwrap();
    let mut feed_rx = page.feed().subscribe();
    let mut reel_rx = page.featured().subscribe();
    drop(page);

    tokio::time::sleep(Duration::from_millis(400)).await;

    assert!(feed_rx.borrow_and_update().is_loading);
    assert!(reel_rx.borrow_and_update().is_empty());
    assert!(feed_rx.changed().await.is_err());
    assert!(reel_rx.changed().await.is_err());
}
