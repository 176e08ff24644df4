//! 接口集成测试
//!
//! 直接驱动 Router，覆盖收据提交与积分查询的完整流程。

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use receipt_processor::{build_router, AppState, MemoryReceiptStore, ReceiptStore};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app() -> (Router, Arc<MemoryReceiptStore>) {
    let store = Arc::new(MemoryReceiptStore::new());
    let app = build_router(AppState::new(store.clone()));
    (app, store)
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
            { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
            { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
            { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
            { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    })
}

/// 提交收据并返回分配的ID
async fn submit(app: &Router, receipt: &Value) -> String {
    let response = app
        .clone()
        .oneshot(post_json("/receipts/process", receipt.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["id"].as_str().unwrap().to_string()
}

async fn points_for(app: &Router, id: &str) -> u64 {
    let response = app
        .clone()
        .oneshot(get(&format!("/receipts/{}/points", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["points"].as_u64().unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = create_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn test_process_receipt_returns_id() {
    let (app, store) = create_test_app();

    let id = submit(&app, &target_receipt()).await;

    assert!(uuid::Uuid::parse_str(&id).is_ok());
    let stored = store.get(&id).unwrap();
    assert_eq!(stored.retailer(), "Target");
    assert_eq!(stored.items().len(), 5);
}

#[tokio::test]
async fn test_target_receipt_points() {
    let (app, _) = create_test_app();

    let id = submit(&app, &target_receipt()).await;

    assert_eq!(points_for(&app, &id).await, 28);
}

#[tokio::test]
async fn test_corner_market_receipt_points() {
    let (app, _) = create_test_app();

    let id = submit(&app, &corner_market_receipt()).await;

    assert_eq!(points_for(&app, &id).await, 109);
}

#[tokio::test]
async fn test_points_are_stable_across_requests() {
    let (app, _) = create_test_app();
    let id = submit(&app, &target_receipt()).await;

    let first = points_for(&app, &id).await;
    let second = points_for(&app, &id).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_each_submission_gets_new_id() {
    let (app, store) = create_test_app();

    let first = submit(&app, &target_receipt()).await;
    let second = submit(&app, &target_receipt()).await;

    assert_ne!(first, second);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored() {
    let (app, _) = create_test_app();
    let mut receipt = target_receipt();
    receipt["id"] = json!("my-own-id");

    let id = submit(&app, &receipt).await;

    assert_ne!(id, "my-own-id");
}

#[tokio::test]
async fn test_unparseable_fields_still_scored() {
    let (app, _) = create_test_app();
    let receipt = json!({
        "retailer": "Shop",
        "purchaseDate": "someday",
        "purchaseTime": "teatime",
        "items": [ { "shortDescription": "abc", "price": "free" } ],
        "total": "unknown"
    });

    let id = submit(&app, &receipt).await;

    assert_eq!(points_for(&app, &id).await, 4);
}

#[tokio::test]
async fn test_points_not_found() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(get("/receipts/does-not-exist/points"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let (app, store) = create_test_app();

    let response = app
        .oneshot(post_json("/receipts/process", "{not json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_missing_field_rejected() {
    let (app, store) = create_test_app();
    let mut receipt = target_receipt();
    receipt.as_object_mut().unwrap().remove("total");

    let response = app
        .oneshot(post_json("/receipts/process", receipt.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_mistyped_field_rejected() {
    let (app, _) = create_test_app();
    let mut receipt = target_receipt();
    receipt["total"] = json!(35.35);

    let response = app
        .oneshot(post_json("/receipts/process", receipt.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
