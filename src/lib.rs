//! # Product API
//!
//! 单一产品资源的 CRUD HTTP 服务：
//! - `core`：错误类型与请求中间件
//! - `app`：产品模型、校验、仓储接口与处理器
//! - `infrastructure`：配置、日志、PostgreSQL 与内存仓储

pub mod app;
pub mod core;
pub mod doc;
pub mod infrastructure;

pub use app::{build_app, AppState};
pub use crate::core::error::CoreError;
