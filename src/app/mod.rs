//! 应用层：路由装配与共享状态

pub mod product;

use axum::{extract::State, middleware, response::Json, routing::get, Router};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::core::{error::CoreError, middleware::request_logging_middleware};
use crate::doc::ApiDoc;
use crate::infrastructure::config::HttpConfig;
use product::ProductRepository;

/// 请求间唯一共享的状态：存储句柄
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

/// 健康检查
async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    state.products.ping().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "store": state.products.kind(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// 不带中间件的路由表
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(product::routes())
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
}

/// 完整应用：路由、中间件与状态
pub fn build_app(state: AppState, http: &HttpConfig) -> Router {
    routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
