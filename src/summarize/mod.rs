//! The chunk-and-combine summarization core.
//!
//! The underlying model accepts a bounded input, so long documents are
//! decomposed, summarized chunk by chunk, and recombined. Organized into:
//! - `budget`: length presets and per-call word bounds
//! - `chunking`: pure, deterministic document decomposition
//! - `config`: thresholds, split strategy, and chunk-failure policy
//! - `engine`: orchestration, statistics, and strategy dispatch
//! - `errors`: the core error taxonomy
//! - `language`: best-effort screening of unsupported input languages

pub mod budget;
pub mod chunking;
pub mod config;
pub mod engine;
pub mod errors;
pub mod language;

// Re-export commonly used types for convenience
pub use budget::{LengthBudget, LengthPreset};
pub use chunking::{split_char_windows, split_word_halves, word_count};
pub use config::{
    CHUNK_PLACEHOLDER, ChunkFailurePolicy, DEFAULT_LONG_THRESHOLD_WORDS, DEFAULT_MIN_INPUT_CHARS,
    DEFAULT_RELAX_MARGIN_WORDS, DEFAULT_WINDOW_CHARS, SplitStrategy, SummarizerConfig,
};
pub use engine::{ChunkedSummarizer, Strategy, SummaryOutcome, SummaryStats};
pub use errors::{SummarizeError, SummarizeResult};
pub use language::{LanguageDetector, RomanianHeuristic};
