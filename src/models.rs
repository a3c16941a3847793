use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{cart_items, chat_sessions, messages, price_history, products, wishlist_items};

pub use crate::entity::messages::MessageRole;
pub use crate::entity::price_history::PricePoint;
pub use crate::entity::products::Retailer;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatSession {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub id: Uuid,
    pub session_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    #[schema(value_type = Object)]
    pub meta: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub image: Option<String>,
    pub rating: f64,
    pub features: Vec<String>,
    pub retailers: Vec<Retailer>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PriceHistory {
    pub history: Vec<PricePoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WishlistItem {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub user_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<chat_sessions::Model> for ChatSession {
    fn from(model: chat_sessions::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<messages::Model> for Message {
    fn from(model: messages::Model) -> Self {
        Self {
            id: model.id,
            session_id: model.session_id,
            role: model.role,
            content: model.content,
            meta: model.meta,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            price: model.price,
            category: model.category,
            in_stock: model.in_stock,
            image: model.image,
            rating: model.rating,
            features: model.features.0,
            retailers: model.retailers.0,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<price_history::Model> for PriceHistory {
    fn from(model: price_history::Model) -> Self {
        Self {
            history: model.history.0,
        }
    }
}

impl From<wishlist_items::Model> for WishlistItem {
    fn from(model: wishlist_items::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            user_email: model.user_email,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<cart_items::Model> for CartItem {
    fn from(model: cart_items::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            quantity: model.quantity,
            user_email: model.user_email,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
