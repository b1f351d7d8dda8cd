//! Error types for the summarization core.

use thiserror::Error;

use crate::llm::ModelError;

/// Errors surfaced by the chunked summarizer.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Input shorter than the minimum usable length.
    #[error("input too short: {chars} characters after trimming, need at least {min_chars}")]
    InputTooShort {
        /// Trimmed input length in characters.
        chars: usize,
        /// Configured minimum.
        min_chars: usize,
    },

    /// Input appears to be in a language the model was not trained for.
    #[error("input looks like {language}; the model only handles English text")]
    UnsupportedLanguage {
        /// Detected language name.
        language: &'static str,
    },

    /// Unknown length preset name.
    #[error("unknown length preset: {0}")]
    UnknownPreset(String),

    /// Invalid summarizer configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Regex compilation error in a heuristic.
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    /// The underlying model call failed.
    #[error("model invocation failed: {0}")]
    Model(#[from] ModelError),
}

impl SummarizeError {
    /// Whether the error is caller guidance rather than a system fault.
    #[must_use]
    pub const fn is_guidance(&self) -> bool {
        matches!(
            self,
            Self::InputTooShort { .. } | Self::UnsupportedLanguage { .. } | Self::UnknownPreset(_)
        )
    }

    /// Human-readable message shown in place of a summary.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InputTooShort { min_chars, .. } => {
                format!("Please provide a longer text (at least {min_chars} characters).")
            }
            Self::UnsupportedLanguage { language } => format!(
                "The text appears to be in {language}, but the model only handles English. \
                 Translate the text to English and try again."
            ),
            Self::UnknownPreset(name) => {
                format!("Unknown summary length '{name}'; use short, medium or long.")
            }
            Self::Model(err) => format!(
                "Summarization failed: {err}. If the text is not in English, translate it first; \
                 otherwise try again in a moment."
            ),
            Self::InvalidConfig(_) | Self::Regex(_) => {
                "Summarization is misconfigured; contact the operator.".to_string()
            }
        }
    }
}

/// Convenience result alias for summarization operations.
pub type SummarizeResult<T> = Result<T, SummarizeError>;
