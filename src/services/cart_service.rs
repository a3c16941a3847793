use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

use crate::{
    dto::cart::AddToCartRequest,
    entity::cart_items::ActiveModel,
    error::{AppError, AppResult},
    models::CartItem,
    response::{ApiResponse, Meta},
    routes::params::parse_id,
    state::AppState,
};

pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartItem>> {
    let db = state.db()?;
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }
    let product_id = parse_id("product_id", &payload.product_id)?;

    let item = ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        quantity: Set(payload.quantity),
        user_email: Set(payload.user_email),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(db)
    .await?;

    tracing::debug!(product_id = %product_id, quantity = item.quantity, "cart item added");
    Ok(ApiResponse::success(
        "added",
        CartItem::from(item),
        Some(Meta::empty()),
    ))
}
