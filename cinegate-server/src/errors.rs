use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use cinegate_core::GatewayError;

pub type AppResult<T> = Result<T, AppError>;

/// Storage failures cross the boundary with their message clipped so
/// internal error text never leaks wholesale to clients.
const STORAGE_MESSAGE_LIMIT: usize = 120;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        }));

        (self.status, body).into_response()
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Configuration(msg) => Self::internal(msg),
            // The provider's own status and body pass through untouched.
            GatewayError::Upstream { status, body } => Self::new(
                StatusCode::from_u16(status)
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                body,
            ),
            GatewayError::Network(err) => {
                Self::bad_gateway(format!("upstream request failed: {err}"))
            }
            GatewayError::Validation(msg) => Self::bad_request(msg),
            GatewayError::NotFound(msg) => Self::not_found(msg),
            GatewayError::Unavailable(msg) => Self::service_unavailable(msg),
            GatewayError::Storage(msg) => {
                Self::internal(truncate(msg, STORAGE_MESSAGE_LIMIT))
            }
        }
    }
}

fn truncate(message: String, limit: usize) -> String {
    if message.len() <= limit {
        return message;
    }
    let mut cut = limit;
    while !message.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &message[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_passes_through() {
        let err = AppError::from(GatewayError::Upstream {
            status: 404,
            body: "{\"status_message\":\"not found\"}".to_string(),
        });
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(err.message.contains("not found"));
    }

    #[test]
    fn storage_messages_are_truncated() {
        let long = "x".repeat(500);
        let err = AppError::from(GatewayError::Storage(long));
        assert!(err.message.len() <= STORAGE_MESSAGE_LIMIT + 3);
        assert!(err.message.ends_with("..."));
    }

    #[test]
    fn unavailable_maps_to_503() {
        let err =
            AppError::from(GatewayError::Unavailable("pool".to_string()));
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
