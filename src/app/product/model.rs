//! 产品数据模型与校验

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{CoreError, FieldViolation};

/// 持久化的产品记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    /// 由存储分配，创建后不可变
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Sample Product")]
    pub name: String,
    #[schema(example = "This is a sample product")]
    pub description: Option<String>,
    #[schema(example = 99.99)]
    pub price: f64,
}

/// 创建/更新请求体
///
/// 字段全部可选，缺失与格式问题统一交给 [`validate`] 报告，
/// 而不是在反序列化阶段失败。
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductPayload {
    #[validate(
        required(message = "Name is mandatory"),
        length(max = 100, message = "Name should not exceed 100 characters")
    )]
    #[schema(example = "Sample Product", max_length = 100)]
    pub name: Option<String>,
    #[schema(example = "This is a sample product")]
    pub description: Option<String>,
    #[validate(required(message = "Price is mandatory"))]
    #[schema(example = 99.99)]
    pub price: Option<f64>,
}

/// 通过校验的载荷，仓储层只接受这种类型
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl ProductDraft {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

/// 载荷校验失败，按字段名排序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn message(&self) -> String {
        self.violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        CoreError::BadRequest {
            message: err.message(),
            details: err.violations,
        }
    }
}

/// 校验载荷，成功时返回可写入存储的草稿
pub fn validate(payload: &ProductPayload) -> Result<ProductDraft, ValidationError> {
    let mut violations: Vec<FieldViolation> = match payload.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldViolation {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| "Validation error".to_string()),
                })
            })
            .collect(),
    };

    // length 规则不识别纯空白
    if let Some(name) = &payload.name {
        if name.trim().is_empty() {
            violations.push(FieldViolation {
                field: "name".to_string(),
                message: "Name is mandatory".to_string(),
            });
        }
    }

    match (&payload.name, payload.price) {
        (Some(name), Some(price)) if violations.is_empty() => Ok(ProductDraft {
            name: name.clone(),
            description: payload.description.clone(),
            price,
        }),
        _ => {
            violations.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
            Err(ValidationError { violations })
        }
    }
}
