use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const RESOURCES: [&str; 5] = ["activities", "leaderboard", "teams", "users", "workouts"];

/// How list endpoints wrap their items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvelopeMode {
    /// `{"count", "next", "previous", "results"}` like a paginated REST backend.
    Paginated,
    /// A bare JSON array.
    Bare,
}

impl EnvelopeMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "paginated" => Some(EnvelopeMode::Paginated),
            "bare" => Some(EnvelopeMode::Bare),
            _ => None,
        }
    }
}

/// A fixed response returned verbatim for one resource.
#[derive(Clone, Debug)]
pub struct Canned {
    pub status: u16,
    pub body: String,
}

#[derive(Serialize)]
pub struct Page<'a> {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: &'a [Value],
}

#[derive(Clone, Debug)]
pub struct Backend {
    mode: EnvelopeMode,
    collections: HashMap<String, Vec<Value>>,
    overrides: HashMap<String, Canned>,
}

impl Backend {
    /// All five collections present and empty.
    pub fn empty(mode: EnvelopeMode) -> Self {
        Self {
            mode,
            collections: RESOURCES.iter().map(|r| (r.to_string(), Vec::new())).collect(),
            overrides: HashMap::new(),
        }
    }

    pub fn seeded(mode: EnvelopeMode) -> Self {
        let mut backend = Self::empty(mode);
        for (resource, items) in seed() {
            backend.collections.insert(resource.to_string(), items);
        }
        backend
    }

    pub fn with_collection(mut self, resource: &str, items: Vec<Value>) -> Self {
        self.collections.insert(resource.to_string(), items);
        self
    }

    /// Respond to `resource` with `status` and a raw `body`, bypassing the
    /// collection and envelope.
    pub fn with_override(mut self, resource: &str, status: u16, body: &str) -> Self {
        self.overrides.insert(
            resource.to_string(),
            Canned {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn mode(&self) -> EnvelopeMode {
        self.mode
    }
}

pub fn app() -> Router {
    router(Backend::seeded(EnvelopeMode::Paginated))
}

pub fn router(backend: Backend) -> Router {
    Router::new()
        .route("/api/{resource}/", get(list_resource))
        .with_state(Arc::new(backend))
}

pub async fn serve(listener: TcpListener, backend: Backend) -> Result<(), std::io::Error> {
    axum::serve(listener, router(backend)).await
}

async fn list_resource(State(backend): State<Arc<Backend>>, Path(resource): Path<String>) -> Response {
    if let Some(canned) = backend.overrides.get(&resource) {
        tracing::debug!(%resource, status = canned.status, "serving canned response");
        let status = StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, [(header::CONTENT_TYPE, "application/json")], canned.body.clone()).into_response();
    }

    let Some(items) = backend.collections.get(&resource) else {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response();
    };

    tracing::debug!(%resource, count = items.len(), mode = ?backend.mode, "serving collection");
    match backend.mode {
        EnvelopeMode::Paginated => Json(Page {
            count: items.len(),
            next: None,
            previous: None,
            results: items,
        })
        .into_response(),
        EnvelopeMode::Bare => Json(items).into_response(),
    }
}

fn seed() -> [(&'static str, Vec<Value>); 5] {
    [
        (
            "activities",
            vec![
                json!({"id": 1, "activity_type": "Running", "duration": 45, "distance": 8.5, "calories_burned": 540, "date": "2024-01-02"}),
                json!({"id": 2, "activity_type": "Cycling", "duration": 90, "distance": 32.1, "calories_burned": 810, "date": "2024-01-03"}),
                json!({"id": 3, "activity_type": "Yoga", "duration": 30, "distance": null, "calories_burned": 150, "date": "2024-01-04"}),
            ],
        ),
        (
            "leaderboard",
            vec![
                json!({"id": 1, "user_name": "thor", "total_points": 1540, "activity_count": 9}),
                json!({"id": 2, "user_name": "diana", "total_points": 1320, "activity_count": 8}),
                json!({"username": "spidey", "points": 980, "activities": 6}),
            ],
        ),
        (
            "teams",
            vec![
                json!({"id": 1, "name": "Team Marvel", "description": "Earth's Mightiest Heroes fighting for fitness!", "member_count": 6, "created_at": "2024-01-01T09:00:00Z"}),
                json!({"id": 2, "name": "Team DC", "description": "Justice League members dedicated to peak performance!", "members": [{"id": 7}, {"id": 8}], "created_at": "2024-01-01T09:05:00Z"}),
            ],
        ),
        (
            "users",
            vec![
                json!({"id": 1, "username": "ironman", "first_name": "Tony", "last_name": "Stark", "email": "ironman@avengers.com", "is_active": true, "date_joined": "2024-01-01T10:00:00Z"}),
                json!({"id": 2, "username": "batman", "first_name": "Bruce", "last_name": "Wayne", "email": "batman@justiceleague.com", "is_active": false}),
            ],
        ),
        (
            "workouts",
            vec![
                json!({"id": 1, "name": "Super Soldier Cardio", "description": "High-intensity cardio", "duration": 45, "difficulty": "Advanced", "category": "Cardio"}),
                json!({"id": 2, "workout_type": "Web-Slinger Agility", "duration": 30, "difficulty": "Intermediate", "category": "Agility"}),
            ],
        ),
    ]
}
