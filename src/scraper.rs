use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::{Document, PageContent};

/// Upper bound on the page text forwarded to the summarizer, in characters.
pub const MAX_CONTENT_CHARS: usize = 6000;

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(5))
        .user_agent(concat!("url-summarizer/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client")
});

static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("body").expect("Failed to parse body selector")
});

const SKIPPED_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Fetches URLs and turns each one into a [`Document`].
#[async_trait]
pub trait PageReader: Send + Sync {
    async fn load_data(&self, urls: &[String]) -> Result<Vec<Document>>;
}

pub struct SimpleWebPageReader {
    html_to_text: bool,
}

impl SimpleWebPageReader {
    pub fn new() -> Self {
        Self { html_to_text: true }
    }

    /// Keep the raw response body instead of extracting visible text.
    pub fn raw_html() -> Self {
        Self { html_to_text: false }
    }
}

impl Default for SimpleWebPageReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageReader for SimpleWebPageReader {
    async fn load_data(&self, urls: &[String]) -> Result<Vec<Document>> {
        let mut documents = Vec::with_capacity(urls.len());
        for url in urls {
            let html = fetch_html(url).await?;
            let text = if self.html_to_text {
                format_text(&extract_text(&html))
            } else {
                html
            };
            documents.push(Document::new(text));
        }
        Ok(documents)
    }
}

pub async fn fetch_html(url: &str) -> Result<String> {
    let response = CLIENT
        .get(url)
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(|e| AppError::FetchError(format!("{}: {}", url, e)))?;

    response
        .text()
        .await
        .map_err(|e| AppError::FetchError(format!("{}: failed to read body: {}", url, e)))
}

/// Visible text of the `<body>`, or of the whole document when there is none.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let root = document
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut text = String::new();
    for node in root.descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            text.push_str(fragment);
        }
    }
    text
}

/// Trims every line and drops blank ones.
pub fn format_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(line);
    }
    result
}

/// Keeps at most `max_chars` characters, cutting on a char boundary.
pub fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(idx);
    }
    text
}

pub struct PageLoader {
    reader: Arc<dyn PageReader>,
}

impl PageLoader {
    pub fn new(reader: Arc<dyn PageReader>) -> Self {
        Self { reader }
    }

    pub async fn load(&self, url: &str) -> Result<PageContent> {
        let documents = self.reader.load_data(&[url.to_string()]).await?;
        debug!(url, documents = documents.len(), "page reader returned documents");

        let combined = documents
            .iter()
            .map(|doc| doc.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let content = truncate_chars(combined, MAX_CONTENT_CHARS);
        info!(url, chars = content.chars().count(), "loaded page content");

        Ok(PageContent {
            url: url.to_string(),
            content,
        })
    }
}
