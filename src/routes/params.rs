use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub const MAX_LIMIT: u64 = 100;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LimitQuery {
    pub limit: Option<u64>,
}

impl LimitQuery {
    pub fn with_limit(limit: u64) -> Self {
        Self { limit: Some(limit) }
    }

    pub fn resolve(&self, default: u64) -> u64 {
        clamp_limit(self.limit, default)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<u64>,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>, limit: Option<u64>) -> Self {
        Self {
            q: q.into(),
            limit,
        }
    }

    pub fn resolve_limit(&self, default: u64) -> u64 {
        clamp_limit(self.limit, default)
    }
}

/// Requested limit, or `default`, clamped to `1..=MAX_LIMIT`.
pub fn clamp_limit(limit: Option<u64>, default: u64) -> u64 {
    limit.unwrap_or(default).clamp(1, MAX_LIMIT)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatQuery {
    pub session_id: String,
    pub query: String,
}

/// Parse an externally supplied identifier, rejecting malformed values at the boundary.
pub fn parse_id(field: &str, raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::BadRequest(format!("invalid {field}: {raw}")))
}
