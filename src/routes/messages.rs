use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::messages::CreateMessageRequest,
    error::AppResult,
    models::Message,
    response::ApiResponse,
    services::message_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(post_message))
}

#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 200, description = "Message stored", body = ApiResponse<Message>),
        (status = 400, description = "Malformed session id or meta"),
        (status = 500, description = "Database not configured"),
    ),
    tag = "Sessions"
)]
pub async fn post_message(
    State(state): State<AppState>,
    Json(payload): Json<CreateMessageRequest>,
) -> AppResult<Json<ApiResponse<Message>>> {
    Ok(Json(message_service::post_message(&state, payload).await?))
}
