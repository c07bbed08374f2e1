use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use product_api::{
    app::{build_app, product::Product, AppState},
    core::error::ErrorResponse,
    infrastructure::{config::HttpConfig, repository::InMemoryProductRepository},
};
use serde_json::json;
use std::sync::Arc;

fn create_test_server() -> TestServer {
    let state = AppState::new(Arc::new(InMemoryProductRepository::new()));
    TestServer::new(build_app(state, &HttpConfig::default())).unwrap()
}

async fn list(server: &TestServer) -> Vec<Product> {
    let response = server.get("/products").await;
    response.assert_status_ok();
    response.json::<Vec<Product>>()
}

#[tokio::test]
async fn test_list_empty_store() {
    let server = create_test_server();

    let response = server.get("/products").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_product_lifecycle() {
    let server = create_test_server();

    // 创建
    let response = server
        .post("/products")
        .json(&json!({
            "name": "Sample Product",
            "description": "desc",
            "price": 99.99
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Product = response.json();
    assert!(created.id > 0);
    assert_eq!(created.name, "Sample Product");
    assert_eq!(created.description.as_deref(), Some("desc"));
    assert_eq!(created.price, 99.99);

    // 读取
    let response = server.get(&format!("/products/{}", created.id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Product>(), created);

    // 更新
    let response = server
        .put(&format!("/products/{}", created.id))
        .json(&json!({
            "name": "Updated",
            "description": "d2",
            "price": 199.99
        }))
        .await;
    response.assert_status_ok();
    let updated: Product = response.json();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Updated");
    assert_eq!(updated.description.as_deref(), Some("d2"));
    assert_eq!(updated.price, 199.99);

    // 删除
    let response = server.delete(&format!("/products/{}", created.id)).await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    let response = server.get(&format!("/products/{}", created.id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_description_is_optional_and_replaced_on_update() {
    let server = create_test_server();

    let created: Product = server
        .post("/products")
        .json(&json!({"name": "Widget", "description": "first", "price": 5.0}))
        .await
        .json();

    let response = server
        .put(&format!("/products/{}", created.id))
        .json(&json!({"name": "Widget", "price": 6.0}))
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["description"], serde_json::Value::Null);
    assert_eq!(body["price"], json!(6.0));
}

#[tokio::test]
async fn test_list_returns_created_products() {
    let server = create_test_server();

    for (name, price) in [("A", 1.0), ("B", 2.0)] {
        server
            .post("/products")
            .json(&json!({"name": name, "price": price}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let names: Vec<String> = list(&server).await.into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[tokio::test]
async fn test_unknown_id_returns_not_found() {
    let server = create_test_server();

    let response = server.get("/products/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, 404);
    assert_eq!(body.message, "Product 999 not found");

    server
        .put("/products/999")
        .json(&json!({"name": "x", "price": 1.0}))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .delete("/products/999")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert!(list(&server).await.is_empty());
}

#[tokio::test]
async fn test_create_validation_errors() {
    let server = create_test_server();

    let long_name = "a".repeat(101);
    let cases = [
        (json!({"price": 1.0}), "Name is mandatory"),
        (json!({"name": "", "price": 1.0}), "Name is mandatory"),
        (json!({"name": "   ", "price": 1.0}), "Name is mandatory"),
        (
            json!({"name": long_name, "price": 1.0}),
            "Name should not exceed 100 characters",
        ),
        (json!({"name": "x"}), "Price is mandatory"),
        (json!({"name": "x", "price": null}), "Price is mandatory"),
    ];

    for (payload, expected) in cases {
        let response = server.post("/products").json(&payload).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "BAD_REQUEST");
        assert_eq!(body.details.len(), 1);
        assert_eq!(body.details[0].message, expected);
    }

    // 校验失败不会写入存储
    assert!(list(&server).await.is_empty());
}

#[tokio::test]
async fn test_create_reports_every_failed_field() {
    let server = create_test_server();

    let response = server.post("/products").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: ErrorResponse = response.json();
    let fields: Vec<&str> = body.details.iter().map(|d| d.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "price"]);
}

#[tokio::test]
async fn test_update_validation_leaves_product_untouched() {
    let server = create_test_server();

    let created: Product = server
        .post("/products")
        .json(&json!({"name": "Keep", "price": 10.0}))
        .await
        .json();

    let response = server
        .put(&format!("/products/{}", created.id))
        .json(&json!({"name": " ", "price": 20.0}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .put(&format!("/products/{}", created.id))
        .json(&json!({"name": "No price"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let current: Product = server
        .get(&format!("/products/{}", created.id))
        .await
        .json();
    assert_eq!(current, created);
}

#[tokio::test]
async fn test_update_validates_before_lookup() {
    let server = create_test_server();

    server
        .put("/products/999")
        .json(&json!({"name": ""}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_twice() {
    let server = create_test_server();

    let created: Product = server
        .post("/products")
        .json(&json!({"name": "Once", "price": 1.0}))
        .await
        .json();
    let path = format!("/products/{}", created.id);

    server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);
    for _ in 0..3 {
        server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
    }
    assert!(list(&server).await.is_empty());
}

#[tokio::test]
async fn test_malformed_bodies_are_bad_requests() {
    let server = create_test_server();

    // 非 JSON 内容类型
    server
        .post("/products")
        .text("name=x&price=1")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    // 类型错误
    server
        .post("/products")
        .json(&json!({"name": "x", "price": "cheap"}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert!(list(&server).await.is_empty());
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let server = create_test_server();

    let response = server.get("/products/abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error, "BAD_REQUEST");
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn test_openapi_document() {
    let server = create_test_server();

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["info"]["title"], "Product API");
    assert!(body["paths"]["/products/{id}"]["delete"].is_object());
}

#[tokio::test]
async fn test_request_id_header() {
    let server = create_test_server();

    let response = server.get("/products").await;
    let generated = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert!(generated.is_some_and(|id| uuid::Uuid::parse_str(&id).is_ok()));

    let response = server
        .get("/products")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("trace-123"),
        )
        .await;
    assert_eq!(
        response.headers().get("x-request-id"),
        Some(&HeaderValue::from_static("trace-123"))
    );
}
