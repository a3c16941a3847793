use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    db::list_tables,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub const SERVICE_NAME: &str = "Shopping AI Assistant API";

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
}

#[derive(Serialize, ToSchema)]
pub struct DatabaseReport {
    pub backend: String,
    pub database: String,
    pub collections: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ApiResponse<HealthData>),
    ),
        tag = "Health"
)]
pub async fn health_check() -> Json<ApiResponse<HealthData>> {
    let data = HealthData {
        status: "ok".to_string(),
    };

    Json(ApiResponse::success(
        "Health check",
        data,
        Some(Meta::empty()),
    ))
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = ApiResponse<ServiceInfo>),
    ),
    tag = "Health"
)]
pub async fn root() -> Json<ApiResponse<ServiceInfo>> {
    let data = ServiceInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(ApiResponse::success(SERVICE_NAME, data, None))
}

/// Reports whether the database is reachable and which tables it holds.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Database connectivity report", body = ApiResponse<DatabaseReport>),
    ),
    tag = "Health"
)]
pub async fn test_database(State(state): State<AppState>) -> Json<ApiResponse<DatabaseReport>> {
    let mut report = DatabaseReport {
        backend: "running".to_string(),
        database: "not available".to_string(),
        collections: Vec::new(),
    };

    if let Some(db) = state.try_db() {
        match list_tables(db).await {
            Ok(tables) => {
                report.database = "connected".to_string();
                report.collections = tables;
            }
            Err(err) => {
                tracing::warn!(error = %err, "database probe failed");
                let detail: String = err.to_string().chars().take(80).collect();
                report.database = format!("error: {detail}");
            }
        }
    }

    Json(ApiResponse::success("Database status", report, None))
}
