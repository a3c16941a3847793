use serde::Deserialize;
use utoipa::ToSchema;

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    pub user_email: Option<String>,
}
