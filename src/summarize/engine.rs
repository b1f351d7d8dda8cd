//! Chunk-and-combine orchestration around the summarization model.
//!
//! The pipeline is a straight line: length guard, optional language screen,
//! strategy dispatch, per-chunk model calls, recombination, statistics. Chunk
//! boundaries depend only on document length and configuration, so repeat
//! calls decompose identically. Chunk calls fan out concurrently but results
//! are recombined in document order.

use std::fmt;
use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::llm::SummaryModel;
use crate::summarize::budget::LengthBudget;
use crate::summarize::chunking::{split_char_windows, split_word_halves, word_count};
use crate::summarize::config::{
    CHUNK_PLACEHOLDER, ChunkFailurePolicy, SplitStrategy, SummarizerConfig,
};
use crate::summarize::errors::{SummarizeError, SummarizeResult};
use crate::summarize::language::LanguageDetector;

/// Which summarization path produced the final summary.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// One model call over the whole document.
    Standard,
    /// One model call, with the document truncated to the model window.
    StandardWithTruncation,
    /// Two halves summarized independently, then reduced in a final pass.
    Hierarchical,
    /// Fixed-size windows summarized independently and joined, no reduction.
    Windowed,
}

impl Strategy {
    /// Stable label for logs and API responses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::StandardWithTruncation => "standard-with-truncation",
            Self::Hierarchical => "hierarchical",
            Self::Windowed => "windowed",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only statistics derived from one summarization call.
#[derive(Clone, Debug, Serialize)]
pub struct SummaryStats {
    /// Whitespace-delimited words in the input document.
    pub original_words: usize,
    /// Words in the final summary.
    pub summary_words: usize,
    /// `1 - summary_words / original_words`.
    pub compression_ratio: f64,
    /// Number of chunks the document was decomposed into.
    pub chunks: usize,
    /// Total model invocations made.
    pub model_calls: usize,
    /// Which path produced the summary.
    pub strategy: Strategy,
}

/// Result of one summarization call.
#[derive(Clone, Debug, Serialize)]
pub struct SummaryOutcome {
    /// The final summary text.
    pub summary: String,
    /// Derived statistics.
    pub stats: SummaryStats,
    /// User-visible note, e.g. that the input was truncated.
    pub note: Option<String>,
}

/// Chunk-and-combine summarizer over an injected, read-only model handle.
pub struct ChunkedSummarizer {
    model: Arc<dyn SummaryModel>,
    detector: Option<Box<dyn LanguageDetector>>,
    config: SummarizerConfig,
}

impl ChunkedSummarizer {
    /// Create a summarizer with the given model handle and configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(model: Arc<dyn SummaryModel>, config: SummarizerConfig) -> SummarizeResult<Self> {
        config.validate()?;
        Ok(Self {
            model,
            detector: None,
            config,
        })
    }

    /// Attach a language screen, applied before any model call.
    #[must_use]
    pub fn with_detector(mut self, detector: Box<dyn LanguageDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Summarize `document` under `budget`.
    ///
    /// `multipass` permits chunked decomposition for long documents. With it
    /// disabled, a long document is summarized in one call — the model
    /// truncates it to its input window — and the truncation is surfaced in
    /// the outcome note.
    ///
    /// # Errors
    /// Returns an error if the input fails validation, the language screen
    /// flags it, or a model call fails under the fail-fast chunk policy.
    pub async fn summarize(
        &self,
        document: &str,
        budget: LengthBudget,
        multipass: bool,
    ) -> SummarizeResult<SummaryOutcome> {
        let trimmed = document.trim();
        let chars = trimmed.chars().count();
        if chars < self.config.min_input_chars {
            return Err(SummarizeError::InputTooShort {
                chars,
                min_chars: self.config.min_input_chars,
            });
        }

        if let Some(detector) = &self.detector {
            if let Some(language) = detector.detect_unsupported(trimmed) {
                return Err(SummarizeError::UnsupportedLanguage { language });
            }
        }

        let outcome = match self.config.split {
            SplitStrategy::TwoPass => self.summarize_two_pass(trimmed, budget, multipass).await?,
            SplitStrategy::Windowed { window_chars } => {
                self.summarize_windowed(trimmed, budget, multipass, window_chars)
                    .await?
            }
        };

        info!(
            strategy = %outcome.stats.strategy,
            original_words = outcome.stats.original_words,
            summary_words = outcome.stats.summary_words,
            "summarization complete"
        );
        Ok(outcome)
    }

    /// Midpoint split with relaxed intermediates and a final reduction pass.
    async fn summarize_two_pass(
        &self,
        text: &str,
        budget: LengthBudget,
        multipass: bool,
    ) -> SummarizeResult<SummaryOutcome> {
        let original_words = word_count(text);

        if !multipass || original_words <= self.config.long_threshold_words {
            let summary = self
                .model
                .summarize(text, budget.min_words, budget.max_words)
                .await?;
            let truncated = original_words > self.config.long_threshold_words;
            let strategy = if truncated {
                Strategy::StandardWithTruncation
            } else {
                Strategy::Standard
            };
            let note = truncated.then(|| {
                format!(
                    "The document has {original_words} words and was truncated to the model \
                     window. Enable multi-pass summarization to cover the whole text."
                )
            });
            return Ok(build_outcome(text, summary, strategy, 1, 1, note));
        }

        debug!(
            words = original_words,
            "splitting document at the word midpoint"
        );
        let (first, second) = split_word_halves(text);
        let relaxed = budget.relaxed(self.config.relax_margin_words);
        let partials = self
            .summarize_chunks(&[first, second], relaxed)
            .await?;

        // Order matters: the first half's summary precedes the second's.
        let combined = partials.join(" ");
        let summary = self
            .model
            .summarize(&combined, budget.min_words, budget.max_words)
            .await?;

        Ok(build_outcome(
            text,
            summary,
            Strategy::Hierarchical,
            2,
            3,
            None,
        ))
    }

    /// Fixed-size windows with the requested budget and no reduction pass.
    async fn summarize_windowed(
        &self,
        text: &str,
        budget: LengthBudget,
        multipass: bool,
        window_chars: usize,
    ) -> SummarizeResult<SummaryOutcome> {
        let total_chars = text.chars().count();

        if !multipass || total_chars <= window_chars {
            let summary = self
                .model
                .summarize(text, budget.min_words, budget.max_words)
                .await?;
            let truncated = total_chars > window_chars;
            let strategy = if truncated {
                Strategy::StandardWithTruncation
            } else {
                Strategy::Standard
            };
            let note = truncated.then(|| {
                format!(
                    "The document has {total_chars} characters and was truncated to one model \
                     window. Enable multi-pass summarization to cover the whole text."
                )
            });
            return Ok(build_outcome(text, summary, strategy, 1, 1, note));
        }

        let windows = split_char_windows(text, window_chars);
        debug!(windows = windows.len(), "summarizing character windows");
        let partials = self.summarize_chunks(&windows, budget).await?;
        let chunks = partials.len();

        Ok(build_outcome(
            text,
            partials.join(" "),
            Strategy::Windowed,
            chunks,
            chunks,
            None,
        ))
    }

    /// Summarize independent chunks concurrently, preserving document order.
    ///
    /// A failed chunk either fails the request or becomes a visible
    /// placeholder, per the configured policy — never an empty string.
    async fn summarize_chunks(
        &self,
        chunks: &[String],
        budget: LengthBudget,
    ) -> SummarizeResult<Vec<String>> {
        let calls = chunks
            .iter()
            .map(|chunk| self.model.summarize(chunk, budget.min_words, budget.max_words));
        let results = join_all(calls).await;

        let mut partials = Vec::with_capacity(chunks.len());
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(partial) => partials.push(partial),
                Err(err) => match self.config.chunk_failure {
                    ChunkFailurePolicy::FailFast => return Err(SummarizeError::Model(err)),
                    ChunkFailurePolicy::Placeholder => {
                        warn!(chunk = index, error = %err, "chunk failed, inserting placeholder");
                        partials.push(CHUNK_PLACEHOLDER.to_string());
                    }
                },
            }
        }

        Ok(partials)
    }
}

/// Assemble the outcome and its derived statistics.
fn build_outcome(
    original: &str,
    summary: String,
    strategy: Strategy,
    chunks: usize,
    model_calls: usize,
    note: Option<String>,
) -> SummaryOutcome {
    let original_words = word_count(original);
    let summary_words = word_count(&summary);
    // The length guard upstream rules out a zero-word original.
    let compression_ratio = 1.0 - (summary_words as f64 / original_words as f64);

    SummaryOutcome {
        summary,
        stats: SummaryStats {
            original_words,
            summary_words,
            compression_ratio,
            chunks,
            model_calls,
            strategy,
        },
        note,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm::ModelError;
    use crate::summarize::budget::LengthPreset;
    use crate::summarize::language::RomanianHeuristic;

    /// Deterministic fake model that records every call.
    struct FakeModel {
        calls: Mutex<Vec<(String, usize, usize)>>,
        fail_on_call: Option<usize>,
    }

    impl FakeModel {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on_call: None,
            }
        }

        fn failing_on(call: usize) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on_call: Some(call),
            }
        }

        fn calls(&self) -> Vec<(String, usize, usize)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SummaryModel for FakeModel {
        async fn summarize(
            &self,
            text: &str,
            min_words: usize,
            max_words: usize,
        ) -> Result<String, ModelError> {
            let mut calls = self.calls.lock().unwrap();
            let index = calls.len();
            calls.push((text.to_string(), min_words, max_words));
            if self.fail_on_call == Some(index) {
                return Err(ModelError::NotReady);
            }
            Ok(format!("summary of {} words", word_count(text)))
        }
    }

    fn document(words: usize) -> String {
        (0..words)
            .map(|i| format!("word{i}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn summarizer(model: Arc<FakeModel>, config: SummarizerConfig) -> ChunkedSummarizer {
        ChunkedSummarizer::new(model, config).unwrap()
    }

    #[tokio::test]
    async fn test_short_input_makes_zero_model_calls() {
        let model = Arc::new(FakeModel::new());
        let engine = summarizer(Arc::clone(&model), SummarizerConfig::default());

        let result = engine
            .summarize("too short", LengthPreset::Medium.budget(), true)
            .await;

        assert!(matches!(result, Err(SummarizeError::InputTooShort { .. })));
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_short_document_uses_standard_strategy() {
        let model = Arc::new(FakeModel::new());
        let engine = summarizer(Arc::clone(&model), SummarizerConfig::default());
        // 40 words, comfortably past the 50-character guard.
        let text = document(40);

        let outcome = engine
            .summarize(&text, LengthPreset::Medium.budget(), true)
            .await
            .unwrap();

        assert_eq!(outcome.stats.strategy, Strategy::Standard);
        assert_eq!(outcome.stats.model_calls, 1);
        assert_eq!(outcome.stats.chunks, 1);
        assert_eq!(model.calls().len(), 1);
        assert!(outcome.note.is_none());
    }

    #[tokio::test]
    async fn test_long_document_hierarchical_path() {
        let model = Arc::new(FakeModel::new());
        let engine = summarizer(Arc::clone(&model), SummarizerConfig::default());
        let text = document(900);
        let budget = LengthPreset::Medium.budget();

        let outcome = engine.summarize(&text, budget, true).await.unwrap();

        assert_eq!(outcome.stats.strategy, Strategy::Hierarchical);
        assert_eq!(outcome.stats.chunks, 2);
        assert_eq!(outcome.stats.model_calls, 3);

        let calls = model.calls();
        assert_eq!(calls.len(), 3);

        // Two halves partition the word sequence at the midpoint.
        assert_eq!(word_count(&calls[0].0), 450);
        assert_eq!(word_count(&calls[1].0), 450);
        assert_eq!(format!("{} {}", calls[0].0, calls[1].0), text);

        // Intermediate budgets are relaxed by the margin; the final pass is not.
        assert_eq!(calls[0].1, budget.min_words);
        assert_eq!(calls[0].2, budget.max_words + 50);
        assert_eq!(calls[1].2, budget.max_words + 50);
        assert_eq!(calls[2].1, budget.min_words);
        assert_eq!(calls[2].2, budget.max_words);

        // The reduction pass sees the joined partials, first half first.
        assert_eq!(calls[2].0, "summary of 450 words summary of 450 words");
    }

    #[tokio::test]
    async fn test_long_document_without_multipass_truncates() {
        let model = Arc::new(FakeModel::new());
        let engine = summarizer(Arc::clone(&model), SummarizerConfig::default());
        let text = document(900);

        let outcome = engine
            .summarize(&text, LengthPreset::Medium.budget(), false)
            .await
            .unwrap();

        assert_eq!(outcome.stats.strategy, Strategy::StandardWithTruncation);
        assert_eq!(outcome.stats.model_calls, 1);
        assert_eq!(model.calls().len(), 1);
        assert!(outcome.note.unwrap().contains("900 words"));
    }

    #[tokio::test]
    async fn test_threshold_is_inclusive() {
        let model = Arc::new(FakeModel::new());
        let engine = summarizer(Arc::clone(&model), SummarizerConfig::default());
        // Exactly at the threshold stays single-pass even with multipass on.
        let text = document(750);

        let outcome = engine
            .summarize(&text, LengthPreset::Short.budget(), true)
            .await
            .unwrap();

        assert_eq!(outcome.stats.strategy, Strategy::Standard);
        assert_eq!(model.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_windowed_strategy_has_no_reduction_pass() {
        let model = Arc::new(FakeModel::new());
        let config = SummarizerConfig::new().with_split(SplitStrategy::Windowed { window_chars: 3000 });
        let engine = summarizer(Arc::clone(&model), config);
        let text = document(1200); // well over 3000 characters
        let budget = LengthPreset::Medium.budget();

        let outcome = engine.summarize(&text, budget, true).await.unwrap();

        assert_eq!(outcome.stats.strategy, Strategy::Windowed);
        assert_eq!(outcome.stats.chunks, outcome.stats.model_calls);
        assert!(outcome.stats.chunks > 1);

        let calls = model.calls();
        assert_eq!(calls.len(), outcome.stats.chunks);
        // Windows reconstruct the document and use the unrelaxed budget.
        let rejoined: String = calls.iter().map(|call| call.0.as_str()).collect();
        assert_eq!(rejoined, text);
        for call in &calls {
            assert_eq!(call.1, budget.min_words);
            assert_eq!(call.2, budget.max_words);
        }
        // The join of the partials is the final summary, untouched.
        let expected: Vec<String> = calls
            .iter()
            .map(|call| format!("summary of {} words", word_count(&call.0)))
            .collect();
        assert_eq!(outcome.summary, expected.join(" "));
    }

    #[tokio::test]
    async fn test_windowed_short_document_is_single_pass() {
        let model = Arc::new(FakeModel::new());
        let config = SummarizerConfig::new().with_split(SplitStrategy::Windowed { window_chars: 3000 });
        let engine = summarizer(Arc::clone(&model), config);
        let text = document(40);

        let outcome = engine
            .summarize(&text, LengthPreset::Medium.budget(), true)
            .await
            .unwrap();

        assert_eq!(outcome.stats.strategy, Strategy::Standard);
        assert_eq!(model.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_chunk_failure_fail_fast() {
        let model = Arc::new(FakeModel::failing_on(1));
        let engine = summarizer(Arc::clone(&model), SummarizerConfig::default());
        let text = document(900);

        let result = engine
            .summarize(&text, LengthPreset::Medium.budget(), true)
            .await;

        assert!(matches!(result, Err(SummarizeError::Model(_))));
    }

    #[tokio::test]
    async fn test_chunk_failure_placeholder_keeps_going() {
        let model = Arc::new(FakeModel::failing_on(1));
        let config = SummarizerConfig::new().with_chunk_failure(ChunkFailurePolicy::Placeholder);
        let engine = summarizer(Arc::clone(&model), config);
        let text = document(900);

        let outcome = engine
            .summarize(&text, LengthPreset::Medium.budget(), true)
            .await
            .unwrap();

        assert_eq!(outcome.stats.strategy, Strategy::Hierarchical);
        // The reduction pass saw the placeholder, not an empty string.
        let calls = model.calls();
        assert!(calls[2].0.contains(CHUNK_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_language_screen_blocks_before_model() {
        let model = Arc::new(FakeModel::new());
        let engine = summarizer(Arc::clone(&model), SummarizerConfig::default())
            .with_detector(Box::new(RomanianHeuristic::new().unwrap()));
        let text = "Schimbările climatice reprezintă una dintre cele mai mari provocări actuale.";

        let result = engine
            .summarize(text, LengthPreset::Medium.budget(), true)
            .await;

        assert!(matches!(
            result,
            Err(SummarizeError::UnsupportedLanguage { language: "Romanian" })
        ));
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_compression_ratio() {
        let model = Arc::new(FakeModel::new());
        let engine = summarizer(Arc::clone(&model), SummarizerConfig::default());
        let text = document(40);

        let outcome = engine
            .summarize(&text, LengthPreset::Medium.budget(), true)
            .await
            .unwrap();

        // Fake summary is "summary of 40 words" — 4 words.
        assert_eq!(outcome.stats.original_words, 40);
        assert_eq!(outcome.stats.summary_words, 4);
        let expected = 1.0 - (4.0 / 40.0);
        assert!((outcome.stats.compression_ratio - expected).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_decomposition_is_idempotent() {
        let model = Arc::new(FakeModel::new());
        let engine = summarizer(Arc::clone(&model), SummarizerConfig::default());
        let text = document(901);
        let budget = LengthPreset::Long.budget();

        let first = engine.summarize(&text, budget, true).await.unwrap();
        let second = engine.summarize(&text, budget, true).await.unwrap();

        assert_eq!(first.stats.strategy, second.stats.strategy);
        let calls = model.calls();
        // Same chunk boundaries on both runs.
        assert_eq!(calls[0].0, calls[3].0);
        assert_eq!(calls[1].0, calls[4].0);
    }
}
