//! HTTP client for a hosted BART summarization model.
//!
//! Behaviour:
//! - `POST {base}/models/{model}` with the document and generation parameters.
//! - The endpoint truncates input to the model window (`truncation`).
//! - Beam search with a length penalty, matching what the model card
//!   recommends for abstractive summarization.
//! - `wait_for_model` lets the first call block while the hosted model loads
//!   instead of failing with a 503.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::llm::model::{ModelError, SummaryModel};

/// Default inference endpoint.
const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Default summarization model.
const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

/// Environment variable for a custom endpoint base URL.
const BASE_URL_ENV: &str = "CONDENSE_INFERENCE_URL";

/// Environment variable for the model identifier.
const MODEL_ENV: &str = "CONDENSE_MODEL";

/// Environment variable for the endpoint API token.
const TOKEN_ENV: &str = "CONDENSE_API_TOKEN";

/// HTTP connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-call deadline; an elapsed deadline is a chunk-level model error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Beam count for generation.
const NUM_BEAMS: u32 = 4;

/// Length penalty encouraging complete sentences.
const LENGTH_PENALTY: f64 = 2.0;

/// Minimal input used to pull the model into memory at startup.
const WARMUP_TEXT: &str =
    "The quick brown fox jumps over the lazy dog near the quiet river bank at dawn.";

/// Length the response body is clipped to inside error messages.
const ERROR_BODY_CLIP: usize = 200;

#[derive(Serialize)]
struct GenerationParameters {
    min_length: usize,
    max_length: usize,
    do_sample: bool,
    num_beams: u32,
    length_penalty: f64,
    early_stopping: bool,
    truncation: bool,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
    use_cache: bool,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
    options: InferenceOptions,
}

#[derive(Deserialize)]
struct InferenceSummary {
    summary_text: String,
}

/// Client for a hosted BART summarization endpoint.
pub struct BartClient {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl BartClient {
    /// Build a client for `model` served at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(base_url: &str, model: &str, token: Option<String>) -> Result<Self, ModelError> {
        Url::parse(base_url)?;

        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let endpoint = format!("{}/models/{model}", base_url.trim_end_matches('/'));

        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    /// Build a client from `CONDENSE_*` environment variables, falling back to
    /// the hosted `facebook/bart-large-cnn` endpoint.
    ///
    /// # Errors
    /// Returns an error if the configured base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn from_env() -> Result<Self, ModelError> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let token = std::env::var(TOKEN_ENV).ok();

        Self::new(&base_url, &model, token)
    }

    /// Fire a minimal request so the hosted model is resident before traffic.
    ///
    /// # Errors
    /// Returns an error if the warm-up call fails.
    pub async fn warm_up(&self) -> Result<(), ModelError> {
        self.request(WARMUP_TEXT, 5, 20).await.map(|_| ())
    }

    async fn request(
        &self,
        text: &str,
        min_words: usize,
        max_words: usize,
    ) -> Result<String, ModelError> {
        let body = InferenceRequest {
            inputs: text,
            parameters: GenerationParameters {
                min_length: min_words,
                max_length: max_words,
                do_sample: false,
                num_beams: NUM_BEAMS,
                length_penalty: LENGTH_PENALTY,
                early_stopping: true,
                truncation: true,
            },
            options: InferenceOptions {
                wait_for_model: true,
                use_cache: false,
            },
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                ModelError::Timeout
            } else {
                ModelError::Http(err)
            }
        })?;

        let status = response.status();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(ModelError::NotReady);
        }
        if !status.is_success() {
            let text_body = response.text().await.unwrap_or_default();
            return Err(ModelError::Status {
                status: status.as_u16(),
                body: clip(&text_body, ERROR_BODY_CLIP),
            });
        }

        let summaries: Vec<InferenceSummary> = response.json().await.map_err(|err| {
            if err.is_timeout() {
                ModelError::Timeout
            } else {
                ModelError::MalformedResponse(err.to_string())
            }
        })?;

        summaries
            .into_iter()
            .next()
            .map(|summary| summary.summary_text)
            .ok_or_else(|| ModelError::MalformedResponse("empty summary array".to_string()))
    }
}

#[async_trait]
impl SummaryModel for BartClient {
    async fn summarize(
        &self,
        text: &str,
        min_words: usize,
        max_words: usize,
    ) -> Result<String, ModelError> {
        debug!(
            chars = text.chars().count(),
            min_words, max_words, "requesting summary"
        );
        self.request(text, min_words, max_words).await
    }
}

/// Clip a string to `max_chars` characters.
fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let result = BartClient::new("not a url", DEFAULT_MODEL, None);
        assert!(matches!(result, Err(ModelError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_endpoint_joins_model_path() {
        let client = BartClient::new("http://localhost:8080/", "my/model", None).unwrap();
        assert_eq!(client.endpoint, "http://localhost:8080/models/my/model");
    }

    #[test]
    fn test_request_body_shape() {
        let body = InferenceRequest {
            inputs: "some text",
            parameters: GenerationParameters {
                min_length: 60,
                max_length: 130,
                do_sample: false,
                num_beams: NUM_BEAMS,
                length_penalty: LENGTH_PENALTY,
                early_stopping: true,
                truncation: true,
            },
            options: InferenceOptions {
                wait_for_model: true,
                use_cache: false,
            },
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["inputs"], "some text");
        assert_eq!(value["parameters"]["min_length"], 60);
        assert_eq!(value["parameters"]["max_length"], 130);
        assert_eq!(value["parameters"]["do_sample"], false);
        assert_eq!(value["options"]["wait_for_model"], true);
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("hello", 10), "hello");
        assert_eq!(clip("hello", 3), "hel");
    }
}
