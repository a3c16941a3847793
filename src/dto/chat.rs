use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Product;

/// Recommendation turn returned by the chat endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatReply {
    pub message: String,
    pub reasons: Vec<String>,
    pub products: Vec<Product>,
    pub compare_on: Vec<String>,
}
