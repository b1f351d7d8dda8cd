//! Length budgets for summarization calls.
//!
//! Budgets are word counts, a deliberate proxy for model tokens: the model
//! treats them as best-effort bounds, and nothing here measures tokens.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::summarize::errors::{SummarizeError, SummarizeResult};

/// Named output-length presets.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPreset {
    /// Roughly two sentences.
    Short,
    /// A paragraph (default).
    #[default]
    Medium,
    /// A detailed paragraph.
    Long,
}

impl LengthPreset {
    /// Word-count bounds for this preset.
    #[must_use]
    pub const fn budget(self) -> LengthBudget {
        match self {
            Self::Short => LengthBudget {
                min_words: 30,
                max_words: 60,
            },
            Self::Medium => LengthBudget {
                min_words: 60,
                max_words: 130,
            },
            Self::Long => LengthBudget {
                min_words: 100,
                max_words: 200,
            },
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl FromStr for LengthPreset {
    type Err = SummarizeError;

    /// Parse a preset name. Unknown names are an error, not a silent default.
    fn from_str(name: &str) -> SummarizeResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            _ => Err(SummarizeError::UnknownPreset(name.to_string())),
        }
    }
}

/// Word-count bounds requested of the model for one summarization call.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LengthBudget {
    /// Minimum output length in words.
    pub min_words: usize,
    /// Maximum output length in words.
    pub max_words: usize,
}

impl LengthBudget {
    /// Build a budget, enforcing `0 < min_words <= max_words`.
    ///
    /// # Errors
    /// Returns an error if either bound is zero or the minimum exceeds the
    /// maximum.
    pub fn new(min_words: usize, max_words: usize) -> SummarizeResult<Self> {
        if min_words == 0 || max_words == 0 {
            return Err(SummarizeError::InvalidConfig(
                "budget bounds must be strictly positive".to_string(),
            ));
        }
        if min_words > max_words {
            return Err(SummarizeError::InvalidConfig(format!(
                "budget minimum {min_words} exceeds maximum {max_words}"
            )));
        }
        Ok(Self {
            min_words,
            max_words,
        })
    }

    /// Widen the maximum by `margin` words, keeping the minimum.
    ///
    /// Intermediate summaries get this slack because they are compressed
    /// again in the reduction pass.
    #[must_use]
    pub const fn relaxed(self, margin: usize) -> Self {
        Self {
            min_words: self.min_words,
            max_words: self.max_words + margin,
        }
    }
}
