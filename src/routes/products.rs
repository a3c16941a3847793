use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::products::ProductList,
    error::AppResult,
    models::PriceHistory,
    response::ApiResponse,
    routes::params::{LimitQuery, SearchQuery, parse_id},
    services::product_service::{self, DEFAULT_SHOWCASE_LIMIT, Showcase},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_products))
        .route("/trending", get(trending_products))
        .route("/essentials", get(essential_products))
        .route("/favorites", get(favorite_products))
        .route("/{product_id}/price-history", get(price_history))
}

#[utoipa::path(
    get,
    path = "/api/products/search",
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive text matched against title, description and category"),
        ("limit" = Option<u64>, Query, description = "Maximum products returned, default 20"),
    ),
    responses(
        (status = 200, description = "Matching products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    Ok(Json(product_service::search_products(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/products/trending",
    params(
        ("limit" = Option<u64>, Query, description = "Maximum products returned, default 8"),
    ),
    responses(
        (status = 200, description = "Highest rated products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn trending_products(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    showcase(&state, Showcase::Trending, query).await
}

#[utoipa::path(
    get,
    path = "/api/products/essentials",
    params(
        ("limit" = Option<u64>, Query, description = "Maximum products returned, default 8"),
    ),
    responses(
        (status = 200, description = "Cheapest products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn essential_products(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    showcase(&state, Showcase::Essentials, query).await
}

#[utoipa::path(
    get,
    path = "/api/products/favorites",
    params(
        ("limit" = Option<u64>, Query, description = "Maximum products returned, default 8"),
    ),
    responses(
        (status = 200, description = "Most recently added products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn favorite_products(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    showcase(&state, Showcase::Favorites, query).await
}

async fn showcase(
    state: &AppState,
    kind: Showcase,
    query: LimitQuery,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let limit = query.resolve(DEFAULT_SHOWCASE_LIMIT);
    Ok(Json(product_service::showcase(state, kind, limit).await?))
}

#[utoipa::path(
    get,
    path = "/api/products/{product_id}/price-history",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Daily price points, empty when unknown", body = ApiResponse<PriceHistory>),
        (status = 400, description = "Malformed product id"),
    ),
    tag = "Products"
)]
pub async fn price_history(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<ApiResponse<PriceHistory>>> {
    let product_id = parse_id("product_id", &product_id)?;
    Ok(Json(product_service::price_history(&state, product_id).await?))
}
