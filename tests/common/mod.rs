//! In-process PokeAPI stand-in for integration tests.

// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use pokedex::{PokeApiClient, TimedCache};
use serde_json::{json, Value};
use tokio::net::TcpListener;

const PAGE_SIZE: usize = 2;
const AREAS: [&str; 4] = [
    "canalave-city-area",
    "eterna-city-area",
    "pastoria-city-area",
    "sunyshore-city-area",
];

#[derive(Clone)]
struct MockState {
    base_url: String,
    requests: Arc<AtomicUsize>,
}

/// A running mock server.
pub struct MockApi {
    pub base_url: String,
    requests: Arc<AtomicUsize>,
}

impl MockApi {
    /// Number of HTTP requests the server has answered.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// A client for this server with a fresh cache.
    pub fn client(&self, ttl: Duration) -> PokeApiClient {
        let cache = TimedCache::new(ttl).unwrap();
        PokeApiClient::new(self.base_url.clone(), cache)
    }
}

pub async fn spawn_mock_api() -> MockApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api/v2", listener.local_addr().unwrap());
    let requests = Arc::new(AtomicUsize::new(0));

    let state = MockState {
        base_url: base_url.clone(),
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/api/v2/location-area/", get(location_areas))
        .route("/api/v2/location-area/:name", get(location_area))
        .route("/api/v2/pokemon/:name", get(pokemon))
        .route("/api/v2/broken/", get(broken))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi { base_url, requests }
}

async fn location_areas(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.requests.fetch_add(1, Ordering::SeqCst);

    let offset: usize = query
        .get("offset")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let page_url = |offset: usize| {
        format!(
            "{}/location-area/?offset={}&limit={}",
            state.base_url, offset, PAGE_SIZE
        )
    };

    let results: Vec<Value> = AREAS
        .iter()
        .enumerate()
        .skip(offset)
        .take(PAGE_SIZE)
        .map(|(i, name)| {
            json!({
                "name": name,
                "url": format!("{}/location-area/{}/", state.base_url, i + 1),
            })
        })
        .collect();
    let next = (offset + PAGE_SIZE < AREAS.len()).then(|| page_url(offset + PAGE_SIZE));
    let previous = (offset > 0).then(|| page_url(offset.saturating_sub(PAGE_SIZE)));

    Json(json!({
        "count": AREAS.len(),
        "next": next,
        "previous": previous,
        "results": results,
    }))
}

async fn location_area(
    State(state): State<MockState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    state.requests.fetch_add(1, Ordering::SeqCst);

    match name.as_str() {
        "canalave-city-area" => Ok(Json(json!({
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": format!("{}/pokemon/72/", state.base_url)}},
                {"pokemon": {"name": "staryu", "url": format!("{}/pokemon/120/", state.base_url)}}
            ]
        }))),
        "empty-area" => Ok(Json(json!({
            "id": 99,
            "name": "empty-area",
            "pokemon_encounters": []
        }))),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn pokemon(
    State(state): State<MockState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    state.requests.fetch_add(1, Ordering::SeqCst);

    if name != "pikachu" {
        return Err(StatusCode::NOT_FOUND);
    }

    // Zero base experience: every catch attempt succeeds
    Ok(Json(json!({
        "id": 25,
        "name": "pikachu",
        "base_experience": 0,
        "height": 4,
        "weight": 60,
        "order": 35,
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": ""}}
        ],
        "abilities": [
            {"ability": {"name": "static", "url": ""}, "is_hidden": false, "slot": 1}
        ],
        "moves": [
            {"move": {"name": "thunder-shock", "url": ""}}
        ]
    })))
}

async fn broken(State(state): State<MockState>) -> &'static str {
    state.requests.fetch_add(1, Ordering::SeqCst);
    "<html>definitely not json</html>"
}
