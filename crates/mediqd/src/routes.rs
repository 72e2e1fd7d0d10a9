//! API routes for mediqd

use crate::server::AppState;
use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use mediq_common::{
    ApiError, ChatReply, ChatRequest, DepartmentMapping, DepartmentsResponse, HealthResponse,
};
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Chat Routes
// ============================================================================

pub fn chat_routes() -> Router<AppStateArc> {
    // Non-POST methods fall through to the JSON 405, matching the error
    // shape of the handler's own rejections
    Router::new().route(
        "/v1/chat",
        post(chat_message).fallback(method_not_allowed),
    )
}

async fn chat_message(
    State(state): State<AppStateArc>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, (StatusCode, Json<ApiError>)> {
    // Missing body, malformed JSON, or missing field - the engine is never
    // invoked for any of these
    let Ok(Json(req)) = payload else {
        return Err(bad_request());
    };

    if req.message.trim().is_empty() {
        return Err(bad_request());
    }

    let outcome = state
        .engine
        .handle_message(&req.message, req.session_id.as_deref())
        .await;

    info!(
        "  Chat reply: action={} session_supplied={}",
        outcome.response.action,
        req.session_id.is_some()
    );

    Ok(Json(ChatReply {
        response: outcome.display,
        timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }))
}

fn bad_request() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::new("Message is required")),
    )
}

async fn method_not_allowed() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiError::new("Method not allowed")),
    )
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    let kb = state.engine.knowledge();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        active_sessions: state.engine.active_sessions().await,
        symptom_categories: kb.symptom_category_count(),
        departments_known: kb.known_department_count(),
    })
}

// ============================================================================
// Department Routes
// ============================================================================

pub fn department_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/departments", get(list_departments))
}

/// Advisory view of the static category -> departments mapping. The portal's
/// live department registry is a separate system; this is not reconciled
/// against it.
async fn list_departments(State(state): State<AppStateArc>) -> Json<DepartmentsResponse> {
    let departments = state
        .engine
        .knowledge()
        .department_map()
        .iter()
        .map(|group| DepartmentMapping {
            category: group.category.to_string(),
            departments: group.departments.iter().map(|d| (*d).to_string()).collect(),
        })
        .collect();

    Json(DepartmentsResponse { departments })
}
