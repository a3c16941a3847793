use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use uuid::Uuid;

use crate::{
    dto::sessions::{CreateSessionRequest, MessageList, SessionList},
    entity::{
        chat_sessions::{ActiveModel, Column, Entity as ChatSessions},
        messages::{Column as MessageCol, Entity as Messages},
    },
    error::AppResult,
    models::{ChatSession, Message},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub const DEFAULT_LIST_LIMIT: u64 = 20;
pub const DEFAULT_RECENT_LIMIT: u64 = 7;

pub async fn create_session(
    state: &AppState,
    payload: CreateSessionRequest,
) -> AppResult<ApiResponse<ChatSession>> {
    let db = state.db()?;
    let session = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(payload.title),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(db)
    .await?;

    tracing::debug!(session_id = %session.id, "chat session created");
    Ok(ApiResponse::success(
        "Session created",
        ChatSession::from(session),
        Some(Meta::empty()),
    ))
}

/// Newest sessions first.
pub async fn list_sessions(state: &AppState, limit: u64) -> AppResult<ApiResponse<SessionList>> {
    let Some(db) = state.try_db() else {
        return Ok(ApiResponse::success(
            "Sessions",
            SessionList { items: Vec::new() },
            Some(Meta::listing(limit)),
        ));
    };

    let items: Vec<ChatSession> = ChatSessions::find()
        .order_by_desc(Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await?
        .into_iter()
        .map(ChatSession::from)
        .collect();

    Ok(ApiResponse::success(
        "Sessions",
        SessionList { items },
        Some(Meta::listing(limit)),
    ))
}

/// Messages of one session in the order they were written.
pub async fn list_messages(
    state: &AppState,
    session_id: Uuid,
) -> AppResult<ApiResponse<MessageList>> {
    let Some(db) = state.try_db() else {
        return Ok(ApiResponse::success(
            "Messages",
            MessageList { items: Vec::new() },
            Some(Meta::empty()),
        ));
    };

    let items: Vec<Message> = Messages::find()
        .filter(MessageCol::SessionId.eq(session_id))
        .order_by_asc(MessageCol::CreatedAt)
        .all(db)
        .await?
        .into_iter()
        .map(Message::from)
        .collect();

    Ok(ApiResponse::success(
        "Messages",
        MessageList { items },
        Some(Meta::empty()),
    ))
}
