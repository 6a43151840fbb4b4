use super::sessions::{SessionId, SessionRegistry};
use super::types::{CreateSessionResponse, SearchResponse};

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Extension, Json, Router};
use serde::Deserialize;
use std::sync::Arc;

// --- API Endpoints ---

pub const ENDPOINT_SESSIONS: &str = "/api/sessions";
pub const ENDPOINT_SESSION: &str = "/api/sessions/:id";
pub const ENDPOINT_SEARCH: &str = "/api/search";

#[derive(Deserialize)]
pub struct SearchParams {
    pub session: String,
    #[serde(default)]
    pub q: String,
}

pub fn router(registry: Arc<SessionRegistry>) -> Router {
    Router::new()
        .route(ENDPOINT_SESSIONS, post(handle_create_session))
        .route(ENDPOINT_SESSION, delete(handle_close_session))
        .route(ENDPOINT_SEARCH, get(handle_search))
        .layer(Extension(registry))
}

pub async fn handle_create_session(
    Extension(registry): Extension<Arc<SessionRegistry>>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let id = registry.create();
    (
        StatusCode::CREATED,
        Json(CreateSessionResponse { session_id: id.0 }),
    )
}

pub async fn handle_close_session(
    Path(id): Path<String>,
    Extension(registry): Extension<Arc<SessionRegistry>>,
) -> StatusCode {
    if registry.remove(&SessionId(id)) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(registry): Extension<Arc<SessionRegistry>>,
) -> Result<Json<SearchResponse>, StatusCode> {
    let Some(coordinator) = registry.get(&SessionId(params.session.clone())) else {
        tracing::warn!("Search for unknown session {}", params.session);
        return Err(StatusCode::NOT_FOUND);
    };

    let outcome = coordinator.search_outcome(&params.q).await;
    let status = outcome.status();
    let results = outcome.into_products();

    Ok(Json(SearchResponse {
        query: params.q.trim().to_string(),
        status,
        count: results.len(),
        results,
    }))
}
