use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::cart::AddToCartRequest,
    error::AppResult,
    models::CartItem,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(add_to_cart))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Added to cart", body = ApiResponse<CartItem>),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Database not configured"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartItem>>> {
    Ok(Json(cart_service::add_to_cart(&state, payload).await?))
}
