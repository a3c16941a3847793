use axum::{
    Json, Router,
    extract::{Query, State},
    routing::post,
};

use crate::{
    dto::chat::ChatReply,
    error::AppResult,
    response::ApiResponse,
    routes::params::ChatQuery,
    services::chat_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(chat))
}

#[utoipa::path(
    post,
    path = "/api/chat",
    params(
        ("session_id" = String, Query, description = "Session the turn belongs to"),
        ("query" = String, Query, description = "Free-text shopping request, may contain a $ budget"),
    ),
    responses(
        (status = 200, description = "Up to three recommendations with reasons", body = ApiResponse<ChatReply>),
        (status = 400, description = "Malformed session id"),
        (status = 500, description = "Database not configured"),
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Query(query): Query<ChatQuery>,
) -> AppResult<Json<ApiResponse<ChatReply>>> {
    Ok(Json(chat_service::chat(&state, query).await?))
}
