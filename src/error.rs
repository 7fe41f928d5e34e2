use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelAtlasError>;

#[derive(Error, Debug)]
pub enum ModelAtlasError {
    /// The caller's request was malformed (blank or oversized query).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The Gemini API could not be reached or refused the request.
    #[error("Upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The Gemini API answered, but not with the agreed schema.
    #[error("Upstream response did not match the expected schema: {0}")]
    UpstreamFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ModelAtlasError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::UpstreamUnavailable(_)
            | Self::UpstreamFormat(_)
            | Self::Config(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ModelAtlasError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Search request failed: {}", self);
        } else {
            tracing::warn!("Search request rejected: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ModelAtlasError::InvalidRequest("empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ModelAtlasError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ModelAtlasError::UpstreamUnavailable("quota".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ModelAtlasError::UpstreamFormat("not json".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_method_not_allowed_message() {
        assert_eq!(
            ModelAtlasError::MethodNotAllowed.to_string(),
            "Method Not Allowed"
        );
    }
}
