//! Configuration for the chunked summarizer.

use serde::{Deserialize, Serialize};

use crate::summarize::errors::{SummarizeError, SummarizeResult};

/// Default word count above which a document counts as long.
pub const DEFAULT_LONG_THRESHOLD_WORDS: usize = 750;

/// Default minimum trimmed input length in characters.
pub const DEFAULT_MIN_INPUT_CHARS: usize = 50;

/// Default extra max-length words granted to intermediate summaries.
pub const DEFAULT_RELAX_MARGIN_WORDS: usize = 50;

/// Default character window for the windowed strategy.
pub const DEFAULT_WINDOW_CHARS: usize = 3000;

/// Marker inserted for a failed chunk under [`ChunkFailurePolicy::Placeholder`].
pub const CHUNK_PLACEHOLDER: &str = "[section omitted: summarization failed]";

/// Environment variable selecting the decomposition policy.
const SPLIT_ENV: &str = "CONDENSE_SPLIT_STRATEGY";

/// Environment variable overriding the long-document word threshold.
const THRESHOLD_ENV: &str = "CONDENSE_LONG_THRESHOLD_WORDS";

/// Decomposition policy for long documents.
///
/// The two policies are materially different and are never merged: `TwoPass`
/// re-compresses the joined partials, `Windowed` returns the join as-is.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SplitStrategy {
    /// Midpoint word split into exactly two halves, relaxed intermediate
    /// budgets, and a final reduction pass with the requested budget.
    TwoPass,
    /// Fixed-size character windows summarized with the requested budget and
    /// joined without a reduction pass.
    Windowed {
        /// Window size in characters.
        window_chars: usize,
    },
}

impl Default for SplitStrategy {
    fn default() -> Self {
        Self::TwoPass
    }
}

/// What to do when one chunk's model call fails.
///
/// Silent empty-string substitution is deliberately not an option: a failed
/// chunk either fails the request or leaves a visible marker.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkFailurePolicy {
    /// Fail the whole request on the first chunk error (default).
    #[default]
    FailFast,
    /// Keep going and insert [`CHUNK_PLACEHOLDER`] for the failed chunk.
    Placeholder,
}

/// Configuration for [`ChunkedSummarizer`](crate::summarize::ChunkedSummarizer).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Word count above which a document counts as long.
    pub long_threshold_words: usize,
    /// Minimum trimmed input length in characters.
    pub min_input_chars: usize,
    /// Extra max-length words granted to intermediate summaries.
    pub relax_margin_words: usize,
    /// Decomposition policy used for long documents.
    pub split: SplitStrategy,
    /// Per-chunk failure handling.
    pub chunk_failure: ChunkFailurePolicy,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            long_threshold_words: DEFAULT_LONG_THRESHOLD_WORDS,
            min_input_chars: DEFAULT_MIN_INPUT_CHARS,
            relax_margin_words: DEFAULT_RELAX_MARGIN_WORDS,
            split: SplitStrategy::default(),
            chunk_failure: ChunkFailurePolicy::default(),
        }
    }
}

impl SummarizerConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the decomposition policy.
    #[must_use]
    pub const fn with_split(mut self, split: SplitStrategy) -> Self {
        self.split = split;
        self
    }

    /// Set the long-document word threshold.
    #[must_use]
    pub const fn with_long_threshold(mut self, words: usize) -> Self {
        self.long_threshold_words = words;
        self
    }

    /// Set the per-chunk failure policy.
    #[must_use]
    pub const fn with_chunk_failure(mut self, policy: ChunkFailurePolicy) -> Self {
        self.chunk_failure = policy;
        self
    }

    /// Build a config from defaults plus `CONDENSE_*` environment overrides.
    ///
    /// `CONDENSE_SPLIT_STRATEGY` accepts `two_pass` or `windowed`;
    /// `CONDENSE_LONG_THRESHOLD_WORDS` accepts a positive integer.
    ///
    /// # Errors
    /// Returns an error if an override has an unrecognized value.
    pub fn from_env() -> SummarizeResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(SPLIT_ENV) {
            config.split = match raw.trim().to_ascii_lowercase().as_str() {
                "two_pass" => SplitStrategy::TwoPass,
                "windowed" => SplitStrategy::Windowed {
                    window_chars: DEFAULT_WINDOW_CHARS,
                },
                other => {
                    return Err(SummarizeError::InvalidConfig(format!(
                        "{SPLIT_ENV} must be two_pass or windowed, got '{other}'"
                    )));
                }
            };
        }

        if let Ok(raw) = std::env::var(THRESHOLD_ENV) {
            config.long_threshold_words = raw.trim().parse().map_err(|_| {
                SummarizeError::InvalidConfig(format!(
                    "{THRESHOLD_ENV} must be a positive integer, got '{raw}'"
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any values are out of range.
    pub fn validate(&self) -> SummarizeResult<()> {
        if self.long_threshold_words == 0 {
            return Err(SummarizeError::InvalidConfig(
                "long_threshold_words must be > 0".to_string(),
            ));
        }

        if self.min_input_chars == 0 {
            return Err(SummarizeError::InvalidConfig(
                "min_input_chars must be > 0".to_string(),
            ));
        }

        if let SplitStrategy::Windowed { window_chars } = self.split {
            if window_chars == 0 {
                return Err(SummarizeError::InvalidConfig(
                    "window_chars must be > 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SummarizerConfig::default();
        assert_eq!(config.long_threshold_words, 750);
        assert_eq!(config.min_input_chars, 50);
        assert_eq!(config.relax_margin_words, 50);
        assert_eq!(config.split, SplitStrategy::TwoPass);
        assert_eq!(config.chunk_failure, ChunkFailurePolicy::FailFast);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SummarizerConfig::new()
            .with_split(SplitStrategy::Windowed { window_chars: 3000 })
            .with_long_threshold(500)
            .with_chunk_failure(ChunkFailurePolicy::Placeholder);

        assert_eq!(config.split, SplitStrategy::Windowed { window_chars: 3000 });
        assert_eq!(config.long_threshold_words, 500);
        assert_eq!(config.chunk_failure, ChunkFailurePolicy::Placeholder);
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let config = SummarizerConfig::new().with_split(SplitStrategy::Windowed { window_chars: 0 });
        assert!(matches!(
            config.validate(),
            Err(SummarizeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_threshold() {
        let config = SummarizerConfig::new().with_long_threshold(0);
        assert!(config.validate().is_err());
    }
}
