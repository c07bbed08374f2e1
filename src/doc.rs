//! OpenAPI 文档

use utoipa::OpenApi;

use crate::app::product::{handler, Product, ProductPayload};
use crate::core::error::{ErrorResponse, FieldViolation};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product API",
        description = "API for managing product resources including CRUD operations"
    ),
    paths(
        handler::list_products,
        handler::get_product,
        handler::create_product,
        handler::update_product,
        handler::delete_product,
    ),
    components(schemas(Product, ProductPayload, ErrorResponse, FieldViolation)),
    tags((name = "products", description = "Product CRUD operations"))
)]
pub struct ApiDoc;
