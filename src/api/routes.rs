use axum::{
    routing::post,
    Router,
    extract::{Json, State},
    http::StatusCode,
};
use reqwest::Url;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::{SummaryResult, UrlRequest};
use crate::api::response::{self, ApiResponse};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/summarize", post(summarize_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn summarize_handler(
    State(state): State<AppState>,
    Json(req): Json<UrlRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SummaryResult>>)> {
    let url = validate_url(&req.url)?;
    info!(url, "summarize request received");

    let result = state.pipeline.run(url).await?;
    Ok(response::success(result))
}

fn validate_url(url: &str) -> Result<&str> {
    if url.trim().is_empty() {
        return Err(AppError::InvalidRequest("url must not be empty".to_string()));
    }
    if url.trim() != url {
        return Err(AppError::InvalidRequest(format!("url {:?} has surrounding whitespace", url)));
    }

    let parsed = Url::parse(url)
        .map_err(|e| AppError::InvalidRequest(format!("invalid url {:?}: {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::InvalidRequest(format!("unsupported url scheme: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_urls() {
        assert_eq!(validate_url("https://example.com/a").unwrap(), "https://example.com/a");
    }

    #[test]
    fn rejects_empty_and_non_http() {
        assert!(matches!(validate_url("  "), Err(AppError::InvalidRequest(_))));
        assert!(matches!(validate_url("not a url"), Err(AppError::InvalidRequest(_))));
        assert!(matches!(validate_url("ftp://example.com"), Err(AppError::InvalidRequest(_))));
    }

    #[test]
    fn rejects_padded_urls() {
        assert!(matches!(validate_url(" https://example.com/a "), Err(AppError::InvalidRequest(_))));
        assert!(matches!(validate_url("https://example.com/a\n"), Err(AppError::InvalidRequest(_))));
    }
}
