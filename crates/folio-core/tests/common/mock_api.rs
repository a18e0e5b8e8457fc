//! Minimal stand-in for the repository listing API.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// How the mock answers listing requests.
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with the given JSON body.
    Json(serde_json::Value),
    /// The given status with a short text body.
    Status(u16),
    /// 200 with a body that is not a repository list.
    Garbage(&'static str),
    /// Wait, then answer 200 with the given JSON body.
    Delayed(Duration, serde_json::Value),
}

/// One request received by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub handle: String,
    pub query: HashMap<String, String>,
    pub accept: Option<String>,
    pub cache_control: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Clone)]
struct MockState {
    reply: Reply,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A running mock server.
pub struct MockApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    server: JoinHandle<()>,
}

impl MockApi {
    /// Start a server on an ephemeral port.
    pub async fn spawn(reply: Reply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply,
            requests: Arc::clone(&requests),
        };

        let app = Router::new()
            .route("/users/{handle}/repos", get(list_repos))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind to ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server");
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            server,
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn list_repos(
    State(state): State<MockState>,
    Path(handle): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        handle,
        query,
        accept: header_value(&headers, header::ACCEPT),
        cache_control: header_value(&headers, header::CACHE_CONTROL),
        user_agent: header_value(&headers, header::USER_AGENT),
    });

    match state.reply {
        Reply::Json(body) => axum::Json(body).into_response(),
        Reply::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap();
            (status, "mock failure").into_response()
        }
        Reply::Garbage(body) => (StatusCode::OK, body).into_response(),
        Reply::Delayed(delay, body) => {
            tokio::time::sleep(delay).await;
            axum::Json(body).into_response()
        }
    }
}

/// A base URL nothing is listening on.
pub async fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind to ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
