use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, post},
};

use crate::{
    dto::wishlist::{AddWishlistRequest, WishlistRemoval},
    error::AppResult,
    models::WishlistItem,
    response::ApiResponse,
    routes::params::parse_id,
    services::wishlist_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_to_wishlist))
        .route("/{product_id}", delete(remove_from_wishlist))
}

#[utoipa::path(
    post,
    path = "/api/wishlist",
    request_body = AddWishlistRequest,
    responses(
        (status = 200, description = "Added to wishlist", body = ApiResponse<WishlistItem>),
        (status = 400, description = "Malformed product id"),
        (status = 500, description = "Database not configured"),
    ),
    tag = "Wishlist"
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    Json(payload): Json<AddWishlistRequest>,
) -> AppResult<Json<ApiResponse<WishlistItem>>> {
    Ok(Json(wishlist_service::add_to_wishlist(&state, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/wishlist/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Every wishlist entry for the product removed", body = ApiResponse<WishlistRemoval>),
        (status = 400, description = "Malformed product id"),
        (status = 500, description = "Database not configured"),
    ),
    tag = "Wishlist"
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<ApiResponse<WishlistRemoval>>> {
    let product_id = parse_id("product_id", &product_id)?;
    Ok(Json(
        wishlist_service::remove_from_wishlist(&state, product_id).await?,
    ))
}
