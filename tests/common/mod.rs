// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test helpers: an in-process mock of the planner backend and the
//! place-search provider, plus context builders.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{TimeZone, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use live_planner::config::Config;
use live_planner::models::schedule::ScheduleActivity;
use live_planner::models::{
    CreateScheduleRequest, LoginRequest, RegisterRequest, Schedule, ScheduleVisibility,
};
use live_planner::services::{GooglePlacesClient, PlaceProvider};
use live_planner::storage::{MemoryStorage, Storage};
use live_planner::AppContext;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Password the mock backend rejects with 401.
#[allow(dead_code)]
pub const WRONG_PASSWORD: &str = "wrong-password";

/// How the mock answers `POST /recommendations`.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum RecommendationMode {
    Text(String),
    Status(u16),
    Malformed,
}

/// Mutable mock backend state, inspectable from tests.
pub struct MockState {
    pub schedules: Vec<Schedule>,
    pub next_id: i64,
    pub recommendation: RecommendationMode,
    /// Answer every authenticated route with 403
    pub reject_auth: bool,
    /// Body returned by the place provider endpoint
    pub places: serde_json::Value,
    /// Query strings received by the place provider endpoint
    pub place_queries: Vec<HashMap<String, String>>,
    /// Chosen activities received by the recommendation endpoint
    pub recommendation_requests: Vec<String>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            schedules: Vec::new(),
            next_id: 1,
            recommendation: RecommendationMode::Text("Try a late-night diner nearby".to_string()),
            reject_auth: false,
            places: serde_json::json!({"results": [], "status": "ZERO_RESULTS"}),
            place_queries: Vec::new(),
            recommendation_requests: Vec::new(),
        }
    }
}

type Shared = Arc<Mutex<MockState>>;

/// Running mock server.
pub struct MockBackend {
    pub addr: std::net::SocketAddr,
    pub state: Shared,
}

#[allow(dead_code)]
impl MockBackend {
    /// Start a mock server on an ephemeral port.
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(MockState::default()));

        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/register", post(register))
            .route("/api/schedules", get(list_schedules).post(create_schedule))
            .route(
                "/api/schedules/{id}",
                get(get_schedule).put(update_schedule).delete(delete_schedule),
            )
            .route("/api/recommendations", post(recommend))
            .route("/places/textsearch/json", get(text_search))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("No local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend failed");
        });

        Self { addr, state }
    }

    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn places_url(&self) -> String {
        format!("http://{}/places", self.addr)
    }

    /// Configuration pointing every endpoint at this mock.
    pub fn config(&self) -> Config {
        Config {
            api_url: self.api_url(),
            places_api_key: Some("test-key".to_string()),
            places_base_url: self.places_url(),
            http_timeout_secs: 5,
            ..Config::default()
        }
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().expect("Mock state poisoned")
    }

    /// Seed a schedule directly into the mock store.
    pub fn insert_schedule(&self, title: &str, visibility: ScheduleVisibility) -> Schedule {
        let mut state = self.state();
        let id = state.next_id;
        state.next_id += 1;
        let schedule = Schedule {
            id,
            title: title.to_string(),
            description: None,
            start_date: Utc.with_ymd_and_hms(2026, 5, 1, 18, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2026, 5, 1, 23, 0, 0).unwrap(),
            visibility,
            activities: Vec::new(),
            created_at: None,
            updated_at: None,
        };
        state.schedules.push(schedule.clone());
        schedule
    }
}

/// Test context against `backend`, with in-memory storage. Returns the
/// durable and session stores for inspection.
#[allow(dead_code)]
pub fn test_context(backend: &MockBackend) -> (AppContext, MemoryStorage, MemoryStorage) {
    let config = backend.config();
    let provider: Arc<dyn PlaceProvider> = Arc::new(
        GooglePlacesClient::new(
            &config.places_base_url,
            "test-key".to_string(),
            Duration::from_secs(5),
        )
        .unwrap(),
    );

    let local = MemoryStorage::new();
    let session = MemoryStorage::new();
    let ctx = AppContext::new(
        config,
        Arc::new(local.clone()) as Arc<dyn Storage>,
        Arc::new(session.clone()) as Arc<dyn Storage>,
        Some(provider),
    )
    .unwrap();
    (ctx, local, session)
}

/// Create a JWT expiring `exp_offset_secs` from now.
#[allow(dead_code)]
pub fn test_jwt(username: &str, exp_offset_secs: i64) -> String {
    #[derive(Serialize)]
    struct Claims {
        sub: String,
        exp: usize,
        iat: usize,
    }

    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: username.to_string(),
        exp: (now + exp_offset_secs) as usize,
        iat: now as usize,
    };

    encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(b"mock-backend-secret"),
    )
    .unwrap()
}

/// Place result JSON in the provider's wire format.
#[allow(dead_code)]
pub fn place_json(
    id: &str,
    name: &str,
    rating: f64,
    reviews: u64,
    kind: &str,
    lat: f64,
    lng: f64,
) -> serde_json::Value {
    serde_json::json!({
        "place_id": id,
        "name": name,
        "rating": rating,
        "user_ratings_total": reviews,
        "types": [kind, "point_of_interest"],
        "geometry": {"location": {"lat": lat, "lng": lng}}
    })
}

// --- Handlers ---

fn is_authorized(state: &MockState, headers: &HeaderMap) -> bool {
    !state.reject_auth
        && headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("Bearer "))
}

fn forbidden() -> Response {
    (StatusCode::FORBIDDEN, "Forbidden").into_response()
}

async fn login(Json(req): Json<LoginRequest>) -> Response {
    if req.password == WRONG_PASSWORD {
        return (StatusCode::UNAUTHORIZED, "Bad credentials").into_response();
    }
    Json(serde_json::json!({
        "token": test_jwt(&req.username, 3600),
        "username": req.username,
    }))
    .into_response()
}

async fn register(Json(req): Json<RegisterRequest>) -> Response {
    Json(serde_json::json!({
        "token": test_jwt(&req.username, 3600),
        "user": {"id": 42, "username": req.username, "email": req.email},
    }))
    .into_response()
}

async fn list_schedules(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let state = state.lock().unwrap();
    if !is_authorized(&state, &headers) {
        return forbidden();
    }
    Json(state.schedules.clone()).into_response()
}

async fn get_schedule(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let state = state.lock().unwrap();
    if !is_authorized(&state, &headers) {
        return forbidden();
    }
    match state.schedules.iter().find(|s| s.id == id) {
        Some(schedule) => Json(schedule.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn to_schedule(id: i64, req: CreateScheduleRequest) -> Schedule {
    Schedule {
        id,
        title: req.title,
        description: req.description,
        start_date: req.start_date,
        end_date: req.end_date,
        visibility: req.visibility,
        activities: req
            .activities
            .into_iter()
            .enumerate()
            .map(|(i, a)| ScheduleActivity {
                id: Some(i as i64 + 1),
                title: a.title,
                description: a.description,
                location: Some(a.location).filter(|l| !l.is_empty()),
                start_time: a.start_time,
                end_time: a.end_time,
            })
            .collect(),
        created_at: Some(Utc::now()),
        updated_at: None,
    }
}

async fn create_schedule(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(req): Json<CreateScheduleRequest>,
) -> Response {
    let mut state = state.lock().unwrap();
    if !is_authorized(&state, &headers) {
        return forbidden();
    }
    let id = state.next_id;
    state.next_id += 1;
    let schedule = to_schedule(id, req);
    state.schedules.push(schedule.clone());
    (StatusCode::CREATED, Json(schedule)).into_response()
}

async fn update_schedule(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(req): Json<CreateScheduleRequest>,
) -> Response {
    let mut state = state.lock().unwrap();
    if !is_authorized(&state, &headers) {
        return forbidden();
    }
    let Some(slot) = state.schedules.iter_mut().find(|s| s.id == id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let mut updated = to_schedule(id, req);
    updated.created_at = slot.created_at;
    updated.updated_at = Some(Utc::now());
    *slot = updated.clone();
    Json(updated).into_response()
}

async fn delete_schedule(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let mut state = state.lock().unwrap();
    if !is_authorized(&state, &headers) {
        return forbidden();
    }
    let before = state.schedules.len();
    state.schedules.retain(|s| s.id != id);
    if state.schedules.len() == before {
        return StatusCode::NOT_FOUND.into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn recommend(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    if !is_authorized(&state, &headers) {
        return forbidden();
    }
    if let Some(chosen) = body.get("chosenActivity").and_then(|v| v.as_str()) {
        state.recommendation_requests.push(chosen.to_string());
    }
    match &state.recommendation {
        RecommendationMode::Text(text) => {
            Json(serde_json::json!({ "recommendation": text })).into_response()
        }
        RecommendationMode::Status(code) => (
            StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            "Recommendation service unavailable",
        )
            .into_response(),
        RecommendationMode::Malformed => {
            (StatusCode::OK, "<html>not json</html>").into_response()
        }
    }
}

async fn text_search(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.place_queries.push(params);
    Json(state.places.clone()).into_response()
}
