use axum::{http::StatusCode, Json};
use serde::Serialize;

/// JSON error envelope shared by every handler.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub fn internal<E: std::fmt::Display>(e: E) -> ApiError {
    api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

/// Fallback for requests that hit a known route with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    api_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_to_error_key() {
        let (status, Json(body)) = api_error(StatusCode::BAD_REQUEST, "Email and password required");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Email and password required"}"#);
    }
}
