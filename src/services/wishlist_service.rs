use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    dto::wishlist::{AddWishlistRequest, WishlistRemoval},
    entity::wishlist_items::{ActiveModel, Column, Entity as WishlistItems},
    error::AppResult,
    models::WishlistItem,
    response::{ApiResponse, Meta},
    routes::params::parse_id,
    state::AppState,
};

pub async fn add_to_wishlist(
    state: &AppState,
    payload: AddWishlistRequest,
) -> AppResult<ApiResponse<WishlistItem>> {
    let db = state.db()?;
    let product_id = parse_id("product_id", &payload.product_id)?;

    let item = ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        user_email: Set(payload.user_email),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(db)
    .await?;

    tracing::debug!(product_id = %product_id, "wishlist item added");
    Ok(ApiResponse::success(
        "added",
        WishlistItem::from(item),
        Some(Meta::empty()),
    ))
}

/// Removes every wishlist entry for the product. Removing nothing is not an error.
pub async fn remove_from_wishlist(
    state: &AppState,
    product_id: Uuid,
) -> AppResult<ApiResponse<WishlistRemoval>> {
    let db = state.db()?;
    let result = WishlistItems::delete_many()
        .filter(Column::ProductId.eq(product_id))
        .exec(db)
        .await?;

    tracing::debug!(product_id = %product_id, removed = result.rows_affected, "wishlist items removed");
    Ok(ApiResponse::success(
        "removed",
        WishlistRemoval {
            product_id: product_id.to_string(),
            removed: result.rows_affected,
        },
        Some(Meta::empty()),
    ))
}
