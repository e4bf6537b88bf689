//! Test helpers: an in-process stand-in for the upstream country API.

use crate::services::upstream::UpstreamClient;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use std::{
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

#[derive(Clone)]
struct FakeState {
    body: Arc<Value>,
    search: bool,
    hits: Arc<AtomicUsize>,
}

/// Fake upstream bound to an ephemeral loopback port.
///
/// Serves `/v3.1/all` and `/v3.1/name/{name}` and counts every request.
pub struct FakeUpstream {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl FakeUpstream {
    /// Serve `body` from `/all`; `/name/{name}` filters it by a
    /// case-insensitive substring of the common name and answers 404 when
    /// nothing matches, the way restcountries does.
    pub async fn start(body: Value) -> Self {
        Self::spawn(body, true).await
    }

    /// Serve `body` unchanged with 200 from every endpoint.
    pub async fn verbatim(body: Value) -> Self {
        Self::spawn(body, false).await
    }

    async fn spawn(body: Value, search: bool) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = FakeState {
            body: Arc::new(body),
            search,
            hits: hits.clone(),
        };

        let app = Router::new()
            .route("/v3.1/all", get(all))
            .route("/v3.1/name/{name}", get(by_name))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, hits }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/v3.1", self.addr)
    }

    pub fn client(&self) -> UpstreamClient {
        // Loopback only; ignore any HTTP_PROXY set on the test host
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        UpstreamClient::with_http_client(http, &self.base_url()).unwrap()
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn all(State(state): State<FakeState>) -> Json<Value> {
    state.hits.fetch_add(1, Ordering::SeqCst);
    Json(state.body.as_ref().clone())
}

async fn by_name(State(state): State<FakeState>, Path(name): Path<String>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if !state.search {
        return Json(state.body.as_ref().clone()).into_response();
    }

    let needle = name.to_lowercase();
    let matches: Vec<Value> = state
        .body
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter(|c| {
                    c["name"]["common"]
                        .as_str()
                        .is_some_and(|n| n.to_lowercase().contains(&needle))
                })
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    if matches.is_empty() {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "status": 404, "message": "Not Found" })),
        )
            .into_response()
    } else {
        Json(Value::Array(matches)).into_response()
    }
}
