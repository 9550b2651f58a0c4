use crate::domain::errors::FieldViolation;

use super::model::ProductId;

/// Product errors for the domain layer.
/// Messages are code-style identifiers for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.validation_failed")]
    Validation(Vec<FieldViolation>),
    #[error("product.duplicate_name")]
    DuplicateName(String),
    #[error("product.not_found")]
    NotFound(ProductId),
}

impl ProductError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProductError::Validation(vec![FieldViolation::new(field, message)])
    }
}
