#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use folio_core::feed::{
    FeedLoader, FeedState, FeedView, FilterPolicy, GitHubSource, PLACEHOLDER_DESCRIPTION,
};
use url::Url;

use crate::common::mock_api::{MockApi, Reply, dead_base_url};
use crate::common::test_utils::{repo_json, repos_fixture};

fn loader_for(base_url: &str) -> FeedLoader {
    let source = GitHubSource::new(Url::parse(base_url).unwrap(), Duration::from_secs(5)).unwrap();
    FeedLoader::new(Arc::new(source))
}

#[tokio::test]
async fn test_request_shape() {
    let api = MockApi::spawn(Reply::Json(serde_json::json!([]))).await;

    loader_for(&api.base_url).load("Clementvsc").await.unwrap();

    let requests = api.requests();
    assert_eq!(requests.len(), 1, "exactly one read per load");
    let request = &requests[0];
    assert_eq!(request.handle, "Clementvsc");
    assert_eq!(request.query.get("per_page").map(String::as_str), Some("100"));
    assert_eq!(request.query.get("sort").map(String::as_str), Some("updated"));
    assert_eq!(
        request.accept.as_deref(),
        Some("application/vnd.github+json")
    );
    assert_eq!(request.cache_control.as_deref(), Some("no-cache"));
    assert!(
        request
            .user_agent
            .as_deref()
            .is_some_and(|ua| ua.starts_with("folio/"))
    );
}

#[tokio::test]
async fn test_three_records_one_archived() {
    let api = MockApi::spawn(Reply::Json(serde_json::json!([
        repo_json(1, "alpha", false, false),
        repo_json(2, "bravo", true, false),
        repo_json(3, "charlie", false, false),
    ])))
    .await;

    let records = loader_for(&api.base_url).load("someone").await.unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "charlie"]);
}

#[tokio::test]
async fn test_fixture_with_each_policy() {
    let api = MockApi::spawn(Reply::Json(repos_fixture())).await;

    let strict = loader_for(&api.base_url).load("Clementvsc").await.unwrap();
    let ids: Vec<u64> = strict.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![880_011, 880_012, 880_015]);

    let lenient = loader_for(&api.base_url)
        .with_policy(FilterPolicy::ArchivedOnly)
        .load("Clementvsc")
        .await
        .unwrap();
    let ids: Vec<u64> = lenient.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![880_011, 880_012, 880_013, 880_015]);

    assert_eq!(api.requests().len(), 2);
}

#[tokio::test]
async fn test_fixture_normalization() {
    let api = MockApi::spawn(Reply::Json(repos_fixture())).await;
    let records = loader_for(&api.base_url).load("Clementvsc").await.unwrap();

    let folio = &records[0];
    assert_eq!(folio.full_name, "Clementvsc/folio");
    assert_eq!(folio.link_target(), "https://clementvsc.dev");
    assert_eq!(folio.updated_date().to_string(), "2024-10-10");

    let bare = &records[1];
    assert_eq!(bare.description, PLACEHOLDER_DESCRIPTION);
    assert_eq!(bare.homepage, "");
    assert_eq!(bare.language, "");
    assert_eq!(bare.link_target(), bare.html_url);
}

#[tokio::test]
async fn test_error_status_becomes_error_state() {
    let api = MockApi::spawn(Reply::Status(503)).await;

    let view = FeedView::mount(loader_for(&api.base_url), "someone").unwrap();
    let state = view.loaded().await;

    assert_eq!(
        state,
        FeedState {
            items: Vec::new(),
            is_loading: false,
            error: Some("Failed to load repositories (HTTP 503)".to_string()),
        }
    );
    assert_eq!(api.requests().len(), 1, "failures are not retried");
}

#[tokio::test]
async fn test_rate_limit_status_reported() {
    let api = MockApi::spawn(Reply::Status(403)).await;

    let err = loader_for(&api.base_url).load("someone").await.unwrap_err();
    assert_eq!(err.status, Some(403));
}

#[tokio::test]
async fn test_undecodable_body() {
    let api = MockApi::spawn(Reply::Garbage("{\"message\": \"not a list\"}")).await;

    let err = loader_for(&api.base_url).load("someone").await.unwrap_err();
    assert!(err.status.is_none());
    assert!(err.message.starts_with("Failed to load repositories:"));
}

#[tokio::test]
async fn test_connection_refused() {
    let base = dead_base_url().await;

    let view = FeedView::mount(loader_for(&base), "someone").unwrap();
    let state = view.loaded().await;
    assert!(!state.is_loading);
    assert!(state.items.is_empty());
    assert!(
        state
            .error
            .as_deref()
            .is_some_and(|msg| msg.starts_with("Failed to load repositories"))
    );
}

#[tokio::test]
async fn test_empty_listing_renders_empty_grid() {
    let api = MockApi::spawn(Reply::Json(serde_json::json!([
        repo_json(1, "archived", true, false),
        repo_json(2, "forked", false, true),
    ])))
    .await;

    let view = FeedView::mount(loader_for(&api.base_url), "someone").unwrap();
    assert_eq!(view.loaded().await, FeedState::loaded(Vec::new()));
}
