//! In-process mock of the OpenCGA REST surface
//!
//! Serves envelope-shaped fixtures for the endpoints the integration tests
//! drive, and records what the client actually sent (auth headers, query
//! params, interpretation update bodies) so tests can assert on it.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

/// One observed request: the bearer token (if any) and the query params.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub bearer: Option<String>,
    pub query: HashMap<String, String>,
}

#[derive(Default)]
pub struct MockState {
    pub panel_searches: Mutex<Vec<SeenRequest>>,
    pub interpretation_updates: Mutex<Vec<Value>>,
    pub logins: Mutex<Vec<Value>>,
}

pub struct MockServer {
    pub base_url: String,
    pub state: Arc<MockState>,
}

pub const TOKEN: &str = "tok-eyJhbGciOi";

pub async fn spawn() -> MockServer {
    let state = Arc::new(MockState::default());
    let app = Router::new()
        .route("/webservices/rest/v2/users/login", post(login))
        .route("/webservices/rest/v2/panels/search", get(panels_search))
        .route(
            "/webservices/rest/v2/analysis/clinical/:ids/info",
            get(clinical_info),
        )
        .route(
            "/webservices/rest/v2/analysis/clinical/:id/interpretation/:iid/update",
            post(interpretation_update),
        )
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock");
    });

    MockServer { base_url, state }
}

/// Wrap result objects in the standard response envelope.
pub fn envelope(results: Vec<Value>, num_matches: i64) -> Value {
    json!({
        "apiVersion": "v2",
        "time": 5,
        "events": [],
        "responses": [{
            "time": 1,
            "events": [],
            "numResults": results.len(),
            "numMatches": num_matches,
            "results": results
        }]
    })
}

fn error_envelope(message: &str) -> Value {
    json!({
        "apiVersion": "v2",
        "events": [{"type": "ERROR", "name": "CatalogException", "message": message}],
        "responses": []
    })
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

async fn login(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Json<Value> {
    state.logins.lock().unwrap().push(body);
    Json(envelope(
        vec![json!({"token": TOKEN, "refreshToken": "refresh-abc"})],
        1,
    ))
}

async fn panels_search(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.panel_searches.lock().unwrap().push(SeenRequest {
        bearer: bearer(&headers),
        query: query.clone(),
    });

    if query.get("name").map(String::as_str) == Some("boom") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(error_envelope("panel query exploded")),
        );
    }

    let results = vec![
        json!({
            "id": "intellectual-disability",
            "name": "Intellectual disability",
            "genes": [{"id": "ENSG00000169057", "name": "MECP2"}],
            "stats": {"numberOfGenes": 1}
        }),
        json!({
            "id": "familial-cancer",
            "name": "Familial cancer",
            "genes": [{"id": "ENSG00000139618", "name": "BRCA2"}]
        }),
    ];
    (StatusCode::OK, Json(envelope(results, 2)))
}

async fn clinical_info(
    Path(ids): Path<String>,
    Query(_query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let cases = ids
        .split(',')
        .map(|id| {
            json!({
                "id": id,
                "type": "FAMILY",
                "interpretation": {
                    "id": format!("{id}.1"),
                    "clinicalAnalysisId": id,
                    "primaryFindings": [
                        {"id": "1:115256530:G:T", "status": "REPORTED"}
                    ]
                }
            })
        })
        .collect::<Vec<_>>();
    let count = cases.len() as i64;
    Json(envelope(cases, count))
}

async fn interpretation_update(
    State(state): State<Arc<MockState>>,
    Path((id, iid)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Json<Value> {
    state
        .interpretation_updates
        .lock()
        .unwrap()
        .push(json!({"clinical": id, "interpretation": iid, "body": body}));
    Json(envelope(vec![json!({"id": iid, "version": 2})], 1))
}
