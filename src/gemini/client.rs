//! Gemini API client module
//!
//! Encapsulates all Gemini API interactions for generating completions.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::FunctionError;

/// Fixed model identifier for all completions.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash-lite";

/// Fixed sampling temperature. Low but non-zero to bias toward consistent,
/// less creative completions.
pub const GEMINI_TEMPERATURE: f32 = 0.5;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Seam for the generative-text backend, so the chat handler can be driven
/// by a mock in tests.
#[async_trait]
pub trait TextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, FunctionError>;
}

/// Gemini API client for generating text completions.
pub struct GeminiClient {
    api_key: String,
    model_name: String,
    temperature: f32,
}

impl GeminiClient {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model_name: GEMINI_MODEL.to_string(),
            temperature: GEMINI_TEMPERATURE,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    /// Submits `prompt` as the entire request content and returns the
    /// rendered text of the first candidate.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request to Gemini fails or the response
    /// cannot be parsed into the expected shape.
    async fn generate(&self, prompt: &str) -> Result<String, FunctionError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Generating completion for a prompt of {} chars",
            prompt.chars().count()
        );

        let request_body = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": self.temperature
            }
        });

        let client = Client::new();
        let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.model_name);

        let response = client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| FunctionError::HttpError(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(FunctionError::GeminiError(format!(
                "Gemini API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            FunctionError::GeminiError(format!("Failed to parse Gemini response: {e}"))
        })?;

        extract_candidate_text(&response_json)
            .ok_or_else(|| FunctionError::GeminiError("No text in response".to_string()))
    }
}

/// Pulls the rendered text out of a `generateContent` response.
/// Concatenates the text parts of the first candidate; returns `None` when
/// the response carries no text at all (e.g. a safety block).
pub(crate) fn extract_candidate_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|p| p.as_array())?;

    let collected: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if collected.is_empty() {
        None
    } else {
        Some(collected.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_candidate_text_single_part() {
        let response = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "Hello there" }],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        });

        assert_eq!(
            extract_candidate_text(&response),
            Some("Hello there".to_string())
        );
    }

    #[test]
    fn test_extract_candidate_text_joins_multiple_parts() {
        let response = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "Hello" }, { "text": " World" }]
                }
            }]
        });

        assert_eq!(
            extract_candidate_text(&response),
            Some("Hello World".to_string())
        );
    }

    #[test]
    fn test_extract_candidate_text_ignores_non_text_parts() {
        let response = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "inlineData": { "mimeType": "image/png" } }, { "text": "caption" }]
                }
            }]
        });

        assert_eq!(
            extract_candidate_text(&response),
            Some("caption".to_string())
        );
    }

    #[test]
    fn test_extract_candidate_text_none_on_empty_candidates() {
        let response = json!({ "candidates": [] });
        assert_eq!(extract_candidate_text(&response), None);
    }

    #[test]
    fn test_extract_candidate_text_none_on_blocked_response() {
        // Safety-blocked responses carry promptFeedback but no candidates.
        let response = json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        });
        assert_eq!(extract_candidate_text(&response), None);
    }
}
