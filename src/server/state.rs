//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::llm::{BartClient, ModelError, SummaryModel};
use crate::summarize::{ChunkedSummarizer, RomanianHeuristic, SummarizerConfig};

/// Shared application state.
pub struct AppState {
    /// The chunked summarizer with its injected model handle.
    pub summarizer: ChunkedSummarizer,
    /// Retained model client, used for the startup warm-up call.
    model: Arc<BartClient>,
}

impl AppState {
    /// Build state from `CONDENSE_*` environment configuration.
    ///
    /// The model handle is created once here and shared read-only for the
    /// lifetime of the process.
    ///
    /// # Errors
    /// Returns an error if the model client, the language heuristic, or the
    /// summarizer configuration cannot be built.
    pub fn from_env() -> Result<Arc<Self>, Box<dyn std::error::Error + Send + Sync>> {
        let model = Arc::new(BartClient::from_env()?);
        let config = SummarizerConfig::from_env()?;

        let handle: Arc<dyn SummaryModel> = model.clone();
        let summarizer = ChunkedSummarizer::new(handle, config)?
            .with_detector(Box::new(RomanianHeuristic::new()?));

        Ok(Arc::new(Self { summarizer, model }))
    }

    /// Pull the hosted model into memory before serving traffic.
    ///
    /// # Errors
    /// Returns an error if the warm-up call fails.
    pub async fn warm_up(&self) -> Result<(), ModelError> {
        self.model.warm_up().await
    }
}
