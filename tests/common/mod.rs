#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Statement, Value};
use serde_json::json;
use shopping_assistant_api::{
    entity::{
        cart_items, chat_sessions,
        messages::{self, MessageRole},
        price_history::{self, PricePoint, PricePoints},
        products::{self, Features, Retailer, Retailers},
        wishlist_items,
    },
    state::AppState,
};
use uuid::Uuid;

pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn state_with(conn: DatabaseConnection) -> AppState {
    AppState::new(Some(conn))
}

/// Every statement the mock connection behind `state` received, in order.
pub fn executed(state: AppState) -> Vec<Statement> {
    let Some(orm) = state.orm else {
        panic!("state has no connection");
    };
    let Ok(conn) = Arc::try_unwrap(orm) else {
        panic!("connection is still shared");
    };
    conn.into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements().to_vec())
        .collect()
}

/// JSON values bound to a statement, such as a message's `meta`.
pub fn json_params(stmt: &Statement) -> Vec<serde_json::Value> {
    stmt.values
        .iter()
        .flat_map(|values| values.0.iter())
        .filter_map(|value| match value {
            Value::Json(Some(json)) => Some((**json).clone()),
            _ => None,
        })
        .collect()
}

pub fn product(title: &str, category: &str, price: f64, rating: f64) -> products::Model {
    let now = Utc::now().fixed_offset();
    products::Model {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: Some(format!("Premium {} item", category.to_lowercase())),
        price,
        category: category.to_string(),
        in_stock: true,
        image: None,
        rating,
        features: Features(vec!["Bluetooth 5.3".to_string()]),
        retailers: Retailers(vec![Retailer {
            name: "Amazon".to_string(),
            price,
            url: Some("https://amazon.com".to_string()),
        }]),
        created_at: now,
        updated_at: now,
    }
}

pub fn session(title: &str) -> chat_sessions::Model {
    chat_sessions::Model {
        id: Uuid::new_v4(),
        title: title.to_string(),
        created_at: Utc::now().fixed_offset(),
    }
}

pub fn message(session_id: Uuid, role: MessageRole, content: &str) -> messages::Model {
    messages::Model {
        id: Uuid::new_v4(),
        session_id,
        role,
        content: content.to_string(),
        meta: json!({}),
        created_at: Utc::now().fixed_offset(),
    }
}

pub fn history(product_id: Uuid, prices: &[f64]) -> price_history::Model {
    let now = Utc::now();
    price_history::Model {
        id: Uuid::new_v4(),
        product_id,
        history: PricePoints(
            prices
                .iter()
                .enumerate()
                .map(|(i, price)| PricePoint {
                    date: now - chrono::Duration::days((prices.len() - 1 - i) as i64),
                    price: *price,
                })
                .collect(),
        ),
    }
}

pub fn wishlist_item(product_id: Uuid) -> wishlist_items::Model {
    wishlist_items::Model {
        id: Uuid::new_v4(),
        product_id,
        user_email: None,
        created_at: Utc::now().fixed_offset(),
    }
}

pub fn cart_item(product_id: Uuid, quantity: i32) -> cart_items::Model {
    cart_items::Model {
        id: Uuid::new_v4(),
        product_id,
        quantity,
        user_email: Some("shopper@example.com".to_string()),
        created_at: Utc::now().fixed_offset(),
    }
}
