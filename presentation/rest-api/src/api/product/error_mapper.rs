use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let response = match self {
            ProductError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    name: "ValidationError".to_string(),
                    message,
                    fields: Some(
                        violations
                            .into_iter()
                            .map(|v| (v.field, v.message))
                            .collect(),
                    ),
                },
            ),
            ProductError::DuplicateName(_) => (
                StatusCode::CONFLICT,
                ErrorResponse::new("DuplicateNameError", &message),
            ),
            ProductError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", &message),
            ),
        };

        (response.0, Json(response.1))
    }
}
