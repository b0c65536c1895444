#![allow(dead_code)]

use axum::{
    http::{HeaderMap, StatusCode, Uri},
    Json, Router,
};
use edwatch::config::insights::InsightsConfig;
use edwatch::services::insights::{InsightsClient, InsightsService};
use edwatch::{AppState, DataStore};
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use std::time::Duration;
use tokio::sync::Notify;

pub struct TestApp {
    pub addr: String,
    pub state: AppState,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.addr, path)
    }
}

/// Seeded app with insights left unconfigured.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(InsightsConfig::default(), true).await
}

pub async fn spawn_app_with(insights: InsightsConfig, seeded: bool) -> TestApp {
    let store = if seeded {
        DataStore::seeded()
    } else {
        DataStore::new()
    };
    let client = InsightsClient::new(insights).expect("Failed to build insights client");
    let state = AppState::new(store, InsightsService::new(client));

    let app = edwatch::routes::create_app(state.clone(), "*");
    let addr = serve(app).await;

    TestApp {
        addr,
        state,
        client: Client::new(),
    }
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Address nothing is listening on, for transport failures.
pub async fn closed_addr() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[derive(Clone)]
pub enum FakeReply {
    Text(&'static str),
    /// 200 with a candidate that carries no text
    Empty,
    ServerError,
    /// Waits for the notify before answering with the text
    Held(Arc<Notify>, &'static str),
}

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub api_key: Option<String>,
    pub body: Value,
}

/// Local stand-in for the Gemini `generateContent` endpoint.
pub struct FakeGemini {
    pub base_url: String,
    pub calls: Arc<AtomicUsize>,
    pub last_request: Arc<Mutex<Option<CapturedRequest>>>,
}

impl FakeGemini {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CapturedRequest> {
        self.last_request.lock().unwrap().clone()
    }

    pub fn config(&self) -> InsightsConfig {
        InsightsConfig::default()
            .with_api_key("test-key")
            .with_base_url(self.base_url.clone())
    }

    /// Poll until the stub has received `n` requests.
    pub async fn wait_for_calls(&self, n: usize) {
        for _ in 0..200 {
            if self.call_count() >= n {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("fake Gemini never received {} request(s)", n);
    }
}

pub async fn spawn_fake_gemini(reply: FakeReply) -> FakeGemini {
    let calls = Arc::new(AtomicUsize::new(0));
    let last_request = Arc::new(Mutex::new(None));

    let handler = {
        let calls = calls.clone();
        let last_request = last_request.clone();
        move |uri: Uri, headers: HeaderMap, Json(body): Json<Value>| {
            let calls = calls.clone();
            let last_request = last_request.clone();
            let reply = reply.clone();
            async move {
                *last_request.lock().unwrap() = Some(CapturedRequest {
                    path: uri.path().to_string(),
                    api_key: headers
                        .get("x-goog-api-key")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                    body,
                });
                calls.fetch_add(1, Ordering::SeqCst);

                match reply {
                    FakeReply::Text(text) => (StatusCode::OK, Json(candidate(text))),
                    FakeReply::Empty => (
                        StatusCode::OK,
                        Json(json!({ "candidates": [{ "content": { "parts": [] } }] })),
                    ),
                    FakeReply::ServerError => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "error": { "code": 500, "message": "backend exploded" } })),
                    ),
                    FakeReply::Held(notify, text) => {
                        notify.notified().await;
                        (StatusCode::OK, Json(candidate(text)))
                    }
                }
            }
        }
    };

    let base_url = format!("{}/v1beta", serve(Router::new().fallback(handler)).await);

    FakeGemini {
        base_url,
        calls,
        last_request,
    }
}

fn candidate(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

pub fn test_school_report() -> Value {
    json!({
        "school_name": "Test School",
        "emis_code": "00000001",
        "province": "Sindh",
        "district": "Thatta",
        "category": "WASH",
        "urgency": "Critical",
        "description": "No water",
        "reporter_name": "A. Tester",
        "role": "Teacher"
    })
}
