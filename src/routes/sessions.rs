use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::sessions::{CreateSessionRequest, MessageList, SessionList},
    error::AppResult,
    models::ChatSession,
    response::ApiResponse,
    routes::params::{LimitQuery, parse_id},
    services::session_service::{self, DEFAULT_LIST_LIMIT, DEFAULT_RECENT_LIMIT},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sessions).post(create_session))
        .route("/recent", get(recent_sessions))
        .route("/{session_id}/messages", get(list_messages))
}

#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = CreateSessionRequest,
    responses(
        (status = 200, description = "Session created", body = ApiResponse<ChatSession>),
        (status = 500, description = "Database not configured"),
    ),
    tag = "Sessions"
)]
pub async fn create_session(
    State(state): State<AppState>,
    Json(payload): Json<CreateSessionRequest>,
) -> AppResult<Json<ApiResponse<ChatSession>>> {
    Ok(Json(session_service::create_session(&state, payload).await?))
}

#[utoipa::path(
    get,
    path = "/api/sessions",
    params(
        ("limit" = Option<u64>, Query, description = "Maximum sessions returned, default 20"),
    ),
    responses(
        (status = 200, description = "Sessions, newest first", body = ApiResponse<SessionList>)
    ),
    tag = "Sessions"
)]
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<ApiResponse<SessionList>>> {
    let limit = query.resolve(DEFAULT_LIST_LIMIT);
    Ok(Json(session_service::list_sessions(&state, limit).await?))
}

#[utoipa::path(
    get,
    path = "/api/sessions/recent",
    params(
        ("limit" = Option<u64>, Query, description = "Maximum sessions returned, default 7"),
    ),
    responses(
        (status = 200, description = "Most recent sessions", body = ApiResponse<SessionList>)
    ),
    tag = "Sessions"
)]
pub async fn recent_sessions(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<ApiResponse<SessionList>>> {
    let limit = query.resolve(DEFAULT_RECENT_LIMIT);
    Ok(Json(session_service::list_sessions(&state, limit).await?))
}

#[utoipa::path(
    get,
    path = "/api/sessions/{session_id}/messages",
    params(
        ("session_id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Messages, oldest first", body = ApiResponse<MessageList>),
        (status = 400, description = "Malformed session id"),
    ),
    tag = "Sessions"
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> AppResult<Json<ApiResponse<MessageList>>> {
    let session_id = parse_id("session_id", &session_id)?;
    Ok(Json(session_service::list_messages(&state, session_id).await?))
}
