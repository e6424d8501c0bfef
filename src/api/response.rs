use serde::Serialize;
use axum::Json;
use axum::http::StatusCode;
use chrono::Utc;

/// Envelope shared by every API reply.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub meta: ResponseMeta,
}

#[derive(Serialize)]
pub struct ResponseMeta {
    pub status: String,
    pub status_code: u16,
    pub timestamp: String,
    pub message: Option<String>,
}

impl ResponseMeta {
    fn new(status: &str, code: StatusCode, message: Option<String>) -> Self {
        Self {
            status: status.to_string(),
            status_code: code.as_u16(),
            timestamp: Utc::now().to_rfc3339(),
            message,
        }
    }
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    let meta = ResponseMeta::new("success", StatusCode::OK, None);
    (StatusCode::OK, Json(ApiResponse { data: Some(data), meta }))
}

pub fn error<T>(status: StatusCode, message: String) -> (StatusCode, Json<ApiResponse<T>>) {
    let meta = ResponseMeta::new("error", status, Some(message));
    (status, Json(ApiResponse { data: None, meta }))
}
