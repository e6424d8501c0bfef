pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod scraper;

use std::sync::Arc;
use config::Config;
use pipeline::Pipeline;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline: Arc::new(pipeline) }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Pipeline::gemini(config.gemini_api_key.clone()))
    }
}
