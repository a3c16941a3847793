mod common;

use common::{executed, json_params, message, mock_db, product, state_with};
use shopping_assistant_api::{
    entity::messages::MessageRole,
    error::AppError,
    routes::params::ChatQuery,
    services::chat_service::{self, ASSISTANT_TEXT, COMPARE_ON},
    state::AppState,
};
use uuid::Uuid;

fn chat_query(session_id: Uuid, text: &str) -> ChatQuery {
    ChatQuery {
        session_id: session_id.to_string(),
        query: text.to_string(),
    }
}

#[tokio::test]
async fn budget_filters_matched_products() -> anyhow::Result<()> {
    let session_id = Uuid::new_v4();
    let pricey = product("Studio Headphones", "Headphones", 349.0, 4.8);
    let cheap = product("Commuter Headphones", "Headphones", 129.0, 4.4);
    let budget = product("Sport Headphones", "Headphones", 199.99, 4.1);

    let conn = mock_db()
        .append_query_results([vec![message(session_id, MessageRole::User, "headphones under $200")]])
        .append_query_results([vec![pricey.clone(), cheap.clone(), budget.clone()]])
        .append_query_results([vec![message(session_id, MessageRole::Assistant, ASSISTANT_TEXT)]])
        .into_connection();
    let state = state_with(conn);

    let reply = chat_service::chat(&state, chat_query(session_id, "headphones under $200"))
        .await?
        .data
        .expect("chat reply");

    assert_eq!(reply.message, ASSISTANT_TEXT);
    assert_eq!(reply.products.len(), 2);
    assert!(reply.products.iter().all(|p| p.price <= 200.0));
    assert_eq!(
        reply.reasons,
        vec![
            "Fits your budget around $200".to_string(),
            "Popular picks in Headphones with strong ratings".to_string(),
        ]
    );
    assert_eq!(reply.compare_on, COMPARE_ON.map(String::from).to_vec());

    let statements = executed(state);
    assert_eq!(statements.len(), 3);
    assert_eq!(json_params(&statements[0]), vec![serde_json::json!({})]);
    let recommended: Vec<String> = reply.products.iter().map(|p| p.id.to_string()).collect();
    assert_eq!(
        json_params(&statements[2]),
        vec![serde_json::json!({ "recommendations": recommended, "reasons": reply.reasons })]
    );
    Ok(())
}

#[tokio::test]
async fn no_text_match_falls_back_to_top_rated() -> anyhow::Result<()> {
    let session_id = Uuid::new_v4();
    let top = vec![
        product("Product 3 Laptops", "Laptops", 1499.0, 4.9),
        product("Product 7 Fitness", "Fitness", 89.0, 4.8),
        product("Product 1 Photography", "Photography", 649.0, 4.7),
        product("Product 9 Smart Home", "Smart Home", 59.0, 4.6),
        product("Product 2 Laptops", "Laptops", 999.0, 4.5),
    ];

    let conn = mock_db()
        .append_query_results([vec![message(session_id, MessageRole::User, "something nice")]])
        .append_query_results([Vec::<shopping_assistant_api::entity::products::Model>::new()])
        .append_query_results([top.clone()])
        .append_query_results([vec![message(session_id, MessageRole::Assistant, ASSISTANT_TEXT)]])
        .into_connection();
    let state = state_with(conn);

    let reply = chat_service::chat(&state, chat_query(session_id, "something nice"))
        .await?
        .data
        .expect("chat reply");

    let ids: Vec<Uuid> = reply.products.iter().map(|p| p.id).collect();
    let expected: Vec<Uuid> = top.iter().take(3).map(|p| p.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(
        reply.reasons,
        vec!["Popular picks in Laptops, Fitness, Photography with strong ratings".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn budget_below_every_price_keeps_unfiltered_picks() -> anyhow::Result<()> {
    let session_id = Uuid::new_v4();
    let laptops = vec![
        product("Ultrabook", "Laptops", 1299.0, 4.7),
        product("Gaming laptop", "Laptops", 1899.0, 4.6),
        product("Chromebook", "Laptops", 399.0, 4.2),
        product("Workstation", "Laptops", 1999.0, 4.5),
    ];

    let conn = mock_db()
        .append_query_results([vec![message(session_id, MessageRole::User, "laptop $99")]])
        .append_query_results([laptops.clone()])
        .append_query_results([vec![message(session_id, MessageRole::Assistant, ASSISTANT_TEXT)]])
        .into_connection();
    let state = state_with(conn);

    let reply = chat_service::chat(&state, chat_query(session_id, "laptop $99"))
        .await?
        .data
        .expect("chat reply");

    let ids: Vec<Uuid> = reply.products.iter().map(|p| p.id).collect();
    let expected: Vec<Uuid> = laptops.iter().take(3).map(|p| p.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(reply.reasons[0], "Fits your budget around $99");
    Ok(())
}

#[tokio::test]
async fn chat_without_database_is_an_error() {
    let state = AppState::without_database();
    let err = chat_service::chat(&state, chat_query(Uuid::new_v4(), "anything"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DatabaseUnavailable));
}

#[tokio::test]
async fn chat_rejects_malformed_session_id() {
    let state = state_with(mock_db().into_connection());
    let err = chat_service::chat(
        &state,
        ChatQuery {
            session_id: "abc".to_string(),
            query: "headphones".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}
