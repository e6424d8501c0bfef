use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::{PageContent, SummaryResult};

pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Produces text for a prompt using a hosted model.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, model: &str, contents: &str) -> Result<String>;
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

pub struct GeminiClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, GEMINI_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, model: &str, contents: &str) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".into(),
                parts: vec![Part { text: contents.into() }],
            }],
        };

        let res = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::GenerationError(format!("request failed: {}", e)))?;

        let status = res.status();
        if !status.is_success() {
            let raw = res.text().await.unwrap_or_default();
            return Err(AppError::GenerationError(format!("{}: {}", status, api_error_message(&raw))));
        }

        let json: Value = res
            .json()
            .await
            .map_err(|e| AppError::GenerationError(format!("invalid response body: {}", e)))?;

        response_text(&json)
            .ok_or_else(|| AppError::GenerationError("Response contained no text".to_string()))
    }
}

/// `error.message` from a Gemini error body, or the raw body when it is not JSON.
pub fn api_error_message(raw: &str) -> String {
    serde_json::from_str::<Value>(raw)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| raw.trim().to_string())
}

/// Joins the text parts of the first candidate, skipping thought parts.
pub fn response_text(json: &Value) -> Option<String> {
    let parts = json["candidates"][0]["content"]["parts"].as_array()?;
    let texts: Vec<&str> = parts
        .iter()
        .filter(|part| !part["thought"].as_bool().unwrap_or(false))
        .filter_map(|part| part["text"].as_str())
        .collect();

    if texts.is_empty() {
        None
    } else {
        Some(texts.concat())
    }
}

pub fn build_prompt(content: &str) -> String {
    let mut result = String::with_capacity(content.len() + 150);
    result.push_str("Summarize the following webpage content in concise bullet points.\n");
    result.push_str("Focus on key ideas and avoid repetition.\n\n");
    result.push_str("CONTENT:\n");
    result.push_str(content);
    result
}

pub struct Summarizer {
    generator: Arc<dyn TextGenerator>,
}

impl Summarizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn summarize(&self, page: &PageContent) -> Result<SummaryResult> {
        let prompt = build_prompt(&page.content);
        info!(url = %page.url, model = GEMINI_MODEL, prompt_chars = prompt.len(), "requesting summary");

        let text = self.generator.generate(GEMINI_MODEL, &prompt).await?;

        Ok(SummaryResult {
            url: page.url.clone(),
            summary: text.trim().to_string(),
        })
    }
}
