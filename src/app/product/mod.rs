//! 产品资源：模型、仓储接口与 HTTP 处理器

pub mod handler;
pub mod model;
pub mod repository;

use axum::{routing::get, Router};

use crate::app::AppState;

pub use model::{validate, Product, ProductDraft, ProductPayload, ValidationError};
pub use repository::{ProductRepository, RepositoryError};

/// 产品路由表
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
}
