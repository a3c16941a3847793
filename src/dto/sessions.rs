use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{ChatSession, Message};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSessionRequest {
    pub title: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct SessionList {
    #[schema(value_type = Vec<ChatSession>)]
    pub items: Vec<ChatSession>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct MessageList {
    #[schema(value_type = Vec<Message>)]
    pub items: Vec<Message>,
}
