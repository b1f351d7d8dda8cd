//! Best-effort language screening for incoming documents.
//!
//! The underlying model is English-only; Romanian input in particular tends to
//! produce incoherent output or hard faults inside the model, so it is flagged
//! before any model call. Detection is a lexical heuristic, advisory rather
//! than correctness-critical: a false negative passes through to the model, a
//! false positive blocks a valid document. The trait seam exists so a real
//! language identifier can replace the heuristic without touching the
//! chunking core.

use std::collections::HashSet;

use regex::Regex;

use crate::summarize::errors::SummarizeResult;

/// Pluggable language screen.
pub trait LanguageDetector: Send + Sync {
    /// Name of the unsupported language the text appears to be in, if any.
    fn detect_unsupported(&self, text: &str) -> Option<&'static str>;
}

/// Characters specific to Romanian orthography.
const ROMANIAN_DIACRITICS: &[char] = &['ă', 'â', 'î', 'ș', 'ț', 'Ă', 'Â', 'Î', 'Ș', 'Ț'];

/// Common Romanian function words, matched on word boundaries.
const ROMANIAN_FUNCTION_WORDS: &str =
    r"\b(și|în|de|la|cu|că|într|această|pentru|sunt|este|sau|mai|între|unul|asupra|către)\b";

/// Distinct function-word hits before text is flagged.
const MIN_FUNCTION_WORD_HITS: usize = 3;

/// Lexical heuristic for Romanian text.
pub struct RomanianHeuristic {
    function_words: Regex,
}

impl RomanianHeuristic {
    /// Build the heuristic, compiling the function-word pattern once.
    ///
    /// # Errors
    /// Returns an error if the pattern fails to compile.
    pub fn new() -> SummarizeResult<Self> {
        Ok(Self {
            function_words: Regex::new(ROMANIAN_FUNCTION_WORDS)?,
        })
    }
}

impl LanguageDetector for RomanianHeuristic {
    fn detect_unsupported(&self, text: &str) -> Option<&'static str> {
        if text.chars().any(|ch| ROMANIAN_DIACRITICS.contains(&ch)) {
            return Some("Romanian");
        }

        let lowered = text.to_lowercase();
        let distinct: HashSet<&str> = self
            .function_words
            .find_iter(&lowered)
            .map(|found| found.as_str())
            .collect();

        (distinct.len() >= MIN_FUNCTION_WORD_HITS).then_some("Romanian")
    }
}
