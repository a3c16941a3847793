use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::MessageRole;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMessageRequest {
    pub session_id: String,
    pub role: MessageRole,
    pub content: String,
    #[schema(value_type = Option<Object>)]
    pub meta: Option<serde_json::Value>,
}
