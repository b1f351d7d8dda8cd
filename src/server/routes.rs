//! HTTP route handlers for the summarization API.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tracing::warn;

use crate::summarize::{LengthPreset, SummaryStats};

use super::state::AppState;

/// Message returned for an empty payload.
const EMPTY_INPUT_MESSAGE: &str = "Please provide text to summarize.";

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/summarize", post(summarize))
        .nest_service("/", ServeDir::new("static"))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "condense",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Summarization request.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// The document to summarize.
    pub text: String,
    /// Output length preset; unknown names are rejected at deserialization.
    #[serde(default)]
    pub length: LengthPreset,
    /// Whether multi-pass decomposition may be used for long documents.
    #[serde(default = "default_hierarchical")]
    pub hierarchical: bool,
}

fn default_hierarchical() -> bool {
    true
}

/// Summarization response.
///
/// Guard and model failures land in `summary` as a guidance message: the
/// transport layer never turns them into a 5xx.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    /// The summary, or a guidance message when summarization was not possible.
    pub summary: String,
    /// Statistics for a successful run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SummaryStats>,
    /// User-visible note, e.g. that the input was truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Handle summarization requests.
async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> Json<SummarizeResponse> {
    if request.text.trim().is_empty() {
        return Json(SummarizeResponse {
            summary: EMPTY_INPUT_MESSAGE.to_string(),
            stats: None,
            note: None,
        });
    }

    let budget = request.length.budget();
    match state
        .summarizer
        .summarize(&request.text, budget, request.hierarchical)
        .await
    {
        Ok(outcome) => Json(SummarizeResponse {
            summary: outcome.summary,
            stats: Some(outcome.stats),
            note: outcome.note,
        }),
        Err(err) => {
            if !err.is_guidance() {
                warn!(error = %err, "summarization failed");
            }
            Json(SummarizeResponse {
                summary: err.user_message(),
                stats: None,
                note: None,
            })
        }
    }
}
