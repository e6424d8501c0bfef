use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::llm::{GeminiClient, Summarizer, TextGenerator};
use crate::models::SummaryResult;
use crate::scraper::{PageLoader, PageReader, SimpleWebPageReader};

/// Wall-clock budget for one invocation, both steps included.
pub const PIPELINE_TIMEOUT: Duration = Duration::from_secs(60);

/// Load a page, then summarize it.
pub struct Pipeline {
    loader: PageLoader,
    summarizer: Summarizer,
    timeout: Duration,
}

impl Pipeline {
    pub fn new(reader: Arc<dyn PageReader>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            loader: PageLoader::new(reader),
            summarizer: Summarizer::new(generator),
            timeout: PIPELINE_TIMEOUT,
        }
    }

    /// Web reader plus Gemini, keyed by `api_key`.
    pub fn gemini(api_key: impl Into<String>) -> Self {
        Self::new(
            Arc::new(SimpleWebPageReader::new()),
            Arc::new(GeminiClient::new(api_key)),
        )
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn run(&self, url: &str) -> Result<SummaryResult> {
        let start = Instant::now();

        let result = tokio::time::timeout(self.timeout, self.load_and_summarize(url)).await;

        match result {
            Ok(Ok(summary)) => {
                info!(url, elapsed = ?start.elapsed(), "pipeline finished");
                Ok(summary)
            }
            Ok(Err(err)) => {
                warn!(url, error = %err, "pipeline failed");
                Err(err)
            }
            Err(_) => {
                warn!(url, timeout = ?self.timeout, "pipeline timed out");
                Err(AppError::TimeoutError(format!(
                    "summarizing {} exceeded {:?}",
                    url, self.timeout
                )))
            }
        }
    }

    async fn load_and_summarize(&self, url: &str) -> Result<SummaryResult> {
        let fetch_start = Instant::now();
        let page = self.loader.load(url).await?;
        info!(url, elapsed = ?fetch_start.elapsed(), "page loaded");

        let llm_start = Instant::now();
        let summary = self.summarizer.summarize(&page).await?;
        info!(url, elapsed = ?llm_start.elapsed(), "summary generated");

        Ok(summary)
    }
}
