mod common;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::{message, mock_db, product, state_with, wishlist_item};
use serde_json::{Value, json};
use shopping_assistant_api::{
    entity::messages::MessageRole, routes::create_app, services::chat_service::ASSISTANT_TEXT,
    state::AppState,
};
use tower::ServiceExt;
use uuid::Uuid;

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn offline_app() -> Router {
    create_app(AppState::without_database())
}

#[tokio::test]
async fn root_and_test_endpoints_report_status() {
    let (status, body) = send(offline_app(), Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Shopping AI Assistant API");

    let (status, body) = send(offline_app(), Method::GET, "/test", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["backend"], "running");
    assert_eq!(body["data"]["database"], "not available");
    assert_eq!(body["data"]["collections"], json!([]));
}

#[tokio::test]
async fn offline_reads_return_empty_lists() {
    for uri in [
        "/api/sessions",
        "/api/sessions/recent?limit=3",
        "/api/products/search?q=laptop",
        "/api/products/trending",
        "/api/products/essentials",
        "/api/products/favorites",
    ] {
        let (status, body) = send(offline_app(), Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["data"], json!([]), "{uri}");
        assert_eq!(body["meta"]["total"], Value::Null, "{uri}");
    }

    let uri = format!("/api/sessions/{}/messages", Uuid::new_v4());
    let (status, body) = send(offline_app(), Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    let uri = format!("/api/products/{}/price-history", Uuid::new_v4());
    let (status, body) = send(offline_app(), Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "history": [] }));
}

#[tokio::test]
async fn offline_writes_are_server_errors() {
    let product_id = Uuid::new_v4().to_string();
    let cases = [
        (Method::POST, "/api/sessions".to_string(), Some(json!({ "title": "New chat" }))),
        (
            Method::POST,
            "/api/messages".to_string(),
            Some(json!({ "session_id": Uuid::new_v4(), "role": "user", "content": "hi" })),
        ),
        (Method::POST, "/api/wishlist".to_string(), Some(json!({ "product_id": product_id }))),
        (Method::DELETE, format!("/api/wishlist/{product_id}"), None),
        (Method::POST, "/api/cart".to_string(), Some(json!({ "product_id": product_id }))),
        (
            Method::POST,
            format!("/api/chat?session_id={}&query=headphones", Uuid::new_v4()),
            None,
        ),
    ];

    for (method, uri, body) in cases {
        let (status, json) = send(offline_app(), method, &uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(json["message"], "Database not configured", "{uri}");
    }
}

#[tokio::test]
async fn malformed_ids_are_bad_requests() {
    let state = state_with(mock_db().into_connection());
    let app = create_app(state);

    let (status, _) = send(app.clone(), Method::GET, "/api/products/xyz/price-history", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(app.clone(), Method::DELETE, "/api/wishlist/xyz", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(app, Method::GET, "/api/sessions/xyz/messages", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_role_is_rejected() {
    let state = state_with(mock_db().into_connection());
    let body = json!({ "session_id": Uuid::new_v4(), "role": "system", "content": "hi" });
    let (status, _) = send(create_app(state), Method::POST, "/api/messages", Some(body)).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn chat_route_returns_recommendations() {
    let session_id = Uuid::new_v4();
    let match_one = product("Noise-cancelling Headphones", "Headphones", 189.0, 4.6);
    let conn = mock_db()
        .append_query_results([vec![message(session_id, MessageRole::User, "headphones")]])
        .append_query_results([vec![match_one.clone()]])
        .append_query_results([vec![message(session_id, MessageRole::Assistant, ASSISTANT_TEXT)]])
        .into_connection();

    let uri = format!("/api/chat?session_id={session_id}&query=headphones");
    let (status, body) = send(create_app(state_with(conn)), Method::POST, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], ASSISTANT_TEXT);
    assert_eq!(body["data"]["products"][0]["id"], match_one.id.to_string());
    assert_eq!(body["data"]["compare_on"], json!(["price", "rating", "key_features"]));
}

#[tokio::test]
async fn wishlist_round_trip_over_http() {
    let product_id = Uuid::new_v4();
    let conn = mock_db()
        .append_query_results([vec![wishlist_item(product_id)]])
        .append_exec_results([sea_orm::MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let app = create_app(state_with(conn));

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/wishlist",
        Some(json!({ "product_id": product_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["product_id"], product_id.to_string());

    let (status, body) = send(app, Method::DELETE, &format!("/api/wishlist/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["removed"], 1);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, body) = send(offline_app(), Method::GET, "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
    assert_eq!(body["data"]["error"], "Not Found");
}
