//! 核心层：错误处理与中间件

pub mod error;
pub mod middleware;

pub use error::{CoreError, ErrorResponse, FieldViolation};
