use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};

use crate::api::response;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch page: {0}")]
    FetchError(String),

    #[error("Text generation error: {0}")]
    GenerationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Timed out: {0}")]
    TimeoutError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::FetchError(_) => StatusCode::BAD_GATEWAY,
            AppError::GenerationError(_) => StatusCode::BAD_GATEWAY,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::TimeoutError(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        response::error::<()>(status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_maps_to_gateway_timeout() {
        let err = AppError::TimeoutError("60s".into());
        assert_eq!(err.status_code(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(err.to_string(), "Timed out: 60s");
    }

    #[test]
    fn fetch_and_generation_map_to_bad_gateway() {
        assert_eq!(AppError::FetchError("x".into()).status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(AppError::GenerationError("x".into()).status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(AppError::InvalidRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
    }
}
