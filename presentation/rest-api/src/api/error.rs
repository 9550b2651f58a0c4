use std::collections::BTreeMap;

use poem::IntoResponse;
use poem::http::StatusCode;
use poem_openapi::{Object, error::ParseRequestPayloadError, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Field name to message, present for validation failures only
    #[oai(skip_serializing_if_is_none)]
    pub fields: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            fields: None,
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Reports a body that could not be parsed at all, such as a number sent as
/// text, in the same JSON shape as a validation failure.
pub async fn payload_error_response(err: ParseRequestPayloadError) -> impl IntoResponse {
    let body = ErrorResponse {
        name: "ValidationError".to_string(),
        message: "request.invalid_payload".to_string(),
        fields: Some(BTreeMap::from([("body".to_string(), err.reason)])),
    };
    (StatusCode::BAD_REQUEST, Json(body))
}
