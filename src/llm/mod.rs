//! Model collaborator for abstractive summarization.
//!
//! The core never talks to an inference backend directly: it goes through the
//! narrow [`SummaryModel`] capability, loaded once at startup and injected as a
//! read-only handle. [`BartClient`] is the production implementation against a
//! hosted `facebook/bart-large-cnn` endpoint.

pub mod bart;
pub mod model;

pub use bart::BartClient;
pub use model::{ModelError, SummaryModel};
