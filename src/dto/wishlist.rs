use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddWishlistRequest {
    pub product_id: String,
    pub user_email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WishlistRemoval {
    pub product_id: String,
    pub removed: u64,
}
