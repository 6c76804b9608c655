//! In-process stand-in for the completion API.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::config::Settings;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub headers: HeaderMap,
    pub body: Value,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    }
}

struct StubState {
    status: StatusCode,
    body: String,
    captured: Mutex<Vec<CapturedRequest>>,
}

pub struct StubUpstream {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubUpstream {
    pub async fn spawn(status: StatusCode, body: Value) -> Self {
        Self::spawn_raw(status, body.to_string()).await
    }

    pub async fn spawn_raw(status: StatusCode, body: impl Into<String>) -> Self {
        let state = Arc::new(StubState {
            status,
            body: body.into(),
            captured: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/v1/chat/completions", post(completions))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn hits(&self) -> usize {
        self.state.captured.lock().unwrap().len()
    }

    pub fn last_request(&self) -> CapturedRequest {
        self.state
            .captured
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("stub upstream received no request")
    }
}

async fn completions(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let body_json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.captured.lock().unwrap().push(CapturedRequest {
        headers,
        body: body_json,
    });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Address that refuses connections.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn test_settings(base_url: &str, api_key: Option<&str>) -> Settings {
    let mut settings = Settings::default();
    settings.upstream.base_url = base_url.to_string();
    settings.upstream.model = "test/model".to_string();
    settings.api_key = api_key.map(|k| k.to_string());
    settings
}

pub fn test_http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
