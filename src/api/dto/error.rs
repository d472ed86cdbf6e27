//! Error response DTOs.

use serde::Serialize;

/// Standard error response format.
///
/// Clients read the human message from `error`; `code` carries the
/// machine-readable error kind. Log correlation travels in the
/// `x-request-id` response header, not the body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error: message.to_string(),
            code: code.to_string(),
        }
    }
}

/// Simple message-only success response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_is_exactly_error_and_code() {
        let json = serde_json::to_value(ErrorResponse::new("NOT_FOUND", "Product not found"))
            .unwrap();
        assert_eq!(json["error"], "Product not found");
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
