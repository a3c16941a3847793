use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    dto::messages::CreateMessageRequest,
    entity::messages::{ActiveModel, MessageRole, Model},
    error::{AppError, AppResult},
    models::Message,
    response::{ApiResponse, Meta},
    routes::params::parse_id,
    state::AppState,
};

pub async fn post_message(
    state: &AppState,
    payload: CreateMessageRequest,
) -> AppResult<ApiResponse<Message>> {
    let db = state.db()?;
    let session_id = parse_id("session_id", &payload.session_id)?;
    let meta = match payload.meta {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(meta @ Value::Object(_)) => meta,
        Some(_) => return Err(AppError::BadRequest("meta must be an object".into())),
    };

    let message = store_message(db, session_id, payload.role, payload.content, meta).await?;
    Ok(ApiResponse::success(
        "ok",
        Message::from(message),
        Some(Meta::empty()),
    ))
}

/// Append one message to a session's transcript.
pub(crate) async fn store_message<C: ConnectionTrait>(
    db: &C,
    session_id: Uuid,
    role: MessageRole,
    content: String,
    meta: Value,
) -> AppResult<Model> {
    let message = ActiveModel {
        id: Set(Uuid::new_v4()),
        session_id: Set(session_id),
        role: Set(role),
        content: Set(content),
        meta: Set(meta),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(db)
    .await?;
    Ok(message)
}
