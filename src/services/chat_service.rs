//! Heuristic shopping assistant.
//!
//! A chat turn stores the user's text, looks for products mentioning it,
//! narrows them to any dollar budget found in the text and answers with up
//! to three picks plus short reasons. Both sides of the turn are persisted
//! to the session transcript.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use crate::{
    dto::chat::ChatReply,
    entity::messages::MessageRole,
    error::AppResult,
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::{ChatQuery, parse_id},
    services::{
        message_service::store_message,
        product_service::{find_matching, top_rated},
    },
    state::AppState,
};

pub const ASSISTANT_TEXT: &str = "Here are a few options I think you'll like. I've compared core specs, pricing across retailers, and highlighted why each stands out.";
pub const COMPARE_ON: [&str; 3] = ["price", "rating", "key_features"];

const SEARCH_LIMIT: u64 = 8;
const FALLBACK_LIMIT: u64 = 5;
const MAX_RECOMMENDATIONS: usize = 3;

static BUDGET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d{2,5})").expect("budget pattern is valid"));

pub async fn chat(state: &AppState, query: ChatQuery) -> AppResult<ApiResponse<ChatReply>> {
    let db = state.db()?;
    let session_id = parse_id("session_id", &query.session_id)?;

    store_message(
        db,
        session_id,
        MessageRole::User,
        query.query.clone(),
        json!({}),
    )
    .await?;

    let budget = extract_budget(&query.query);

    let mut candidates = find_matching(db, &query.query, SEARCH_LIMIT).await?;
    if candidates.is_empty() {
        tracing::debug!("no text match, falling back to top rated products");
        candidates = top_rated(db, FALLBACK_LIMIT).await?;
    }
    let candidates: Vec<Product> = candidates.into_iter().map(Product::from).collect();

    let products: Vec<Product> = within_budget(candidates, budget)
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .collect();
    let reasons = build_reasons(budget, &products);

    let recommended: Vec<String> = products.iter().map(|p| p.id.to_string()).collect();
    store_message(
        db,
        session_id,
        MessageRole::Assistant,
        ASSISTANT_TEXT.to_string(),
        json!({ "recommendations": recommended, "reasons": reasons }),
    )
    .await?;

    tracing::info!(
        session_id = %session_id,
        budget = ?budget,
        recommended = products.len(),
        "chat recommendations served"
    );

    let reply = ChatReply {
        message: ASSISTANT_TEXT.to_string(),
        reasons,
        products,
        compare_on: COMPARE_ON.iter().map(|field| field.to_string()).collect(),
    };
    Ok(ApiResponse::success("Recommendations", reply, Some(Meta::empty())))
}

/// First `$` followed by 2 to 5 digits, after thousands separators are removed.
/// A zero amount is treated as no budget.
pub fn extract_budget(text: &str) -> Option<f64> {
    let cleaned = text.replace(',', "");
    let captures = BUDGET_PATTERN.captures(&cleaned)?;
    let amount = captures.get(1)?.as_str().parse::<f64>().ok()?;
    (amount > 0.0).then_some(amount)
}

/// Keeps products priced at or below the budget. When none qualify the
/// unfiltered list is returned unchanged.
pub fn within_budget(products: Vec<Product>, budget: Option<f64>) -> Vec<Product> {
    let Some(budget) = budget else {
        return products;
    };
    let affordable: Vec<Product> = products
        .iter()
        .filter(|p| p.price <= budget)
        .cloned()
        .collect();
    if affordable.is_empty() {
        products
    } else {
        affordable
    }
}

pub fn build_reasons(budget: Option<f64>, recommendations: &[Product]) -> Vec<String> {
    let mut reasons = Vec::new();
    if let Some(budget) = budget {
        reasons.push(format!("Fits your budget around ${}", budget as i64));
    }
    if !recommendations.is_empty() {
        let mut categories: Vec<&str> = Vec::new();
        for product in recommendations {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        reasons.push(format!(
            "Popular picks in {} with strong ratings",
            categories.join(", ")
        ));
    }
    reasons
}
