use serde::{Deserialize, Serialize};

/// Input to one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

/// Extracted page text, already capped at [`crate::scraper::MAX_CONTENT_CHARS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub url: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub url: String,
    pub summary: String,
}

/// A single document handed back by a [`crate::scraper::PageReader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
