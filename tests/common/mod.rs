#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use url_summarizer::error::{AppError, Result};
use url_summarizer::llm::TextGenerator;
use url_summarizer::models::Document;
use url_summarizer::scraper::PageReader;

/// Returns canned documents and records the URLs it was asked for.
pub struct MockReader {
    pub outcome: std::result::Result<Vec<String>, String>,
    pub delay: Option<Duration>,
    pub requested: Mutex<Vec<Vec<String>>>,
}

impl MockReader {
    pub fn with_texts(texts: &[&str]) -> Self {
        Self {
            outcome: Ok(texts.iter().map(|t| t.to_string()).collect()),
            delay: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            delay: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl PageReader for MockReader {
    async fn load_data(&self, urls: &[String]) -> Result<Vec<Document>> {
        self.requested.lock().unwrap().push(urls.to_vec());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.outcome {
            Ok(texts) => Ok(texts.iter().map(|t| Document::new(t.as_str())).collect()),
            Err(msg) => Err(AppError::FetchError(msg.clone())),
        }
    }
}

/// Returns a canned reply and records every (model, prompt) pair.
pub struct MockGenerator {
    pub outcome: std::result::Result<String, String>,
    pub delay: Option<Duration>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl MockGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, model: &str, contents: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), contents.to_string()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err(msg) => Err(AppError::GenerationError(msg.clone())),
        }
    }
}
