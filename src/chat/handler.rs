//! Chat Lambda handler - validates the request and proxies it to Gemini.
//!
//! This module handles:
//! - Configuration check (Gemini API key must be resolvable)
//! - Request validation (`text` must be a non-empty string)
//! - The outbound completion call and error redaction

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};

use super::helpers::{self, CODE_INTERNAL, CODE_INVALID_ARGUMENT};
use crate::core::config::AppConfig;
use crate::gemini::{GeminiClient, TextGenerator};

pub use self::function_handler as handler;

/// A request that passed configuration and argument validation and is ready
/// for the outbound call.
#[derive(Debug)]
pub struct PreparedRequest {
    pub api_key: String,
    pub text: String,
}

/// Lambda handler for the chat entrypoint.
///
/// Returns `{"text": ...}` on success, or a typed error payload with code
/// `invalid-argument` or `internal`. Validation failures never reach the
/// Gemini API; upstream failures are logged in full but reported to the
/// caller only as a generic message.
///
/// # Errors
///
/// Never returns `Err`; every failure is expressed as an error payload in
/// the response body.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env();

    #[cfg(feature = "debug-logs")]
    info!("Chat Lambda received request: {:?}", event.payload);

    match validate_request(&config, &event.payload) {
        Err(response) => Ok(response),
        Ok(prepared) => {
            let client = GeminiClient::new(prepared.api_key);
            Ok(complete_text(&client, &prepared.text).await)
        }
    }
}

/// Checks the configuration secret and the caller payload, in that order.
///
/// # Errors
///
/// Returns the response payload to send back when the key is missing
/// (`internal`) or `text` is absent, empty, or not a string
/// (`invalid-argument`). No outbound call happens on either path.
pub fn validate_request(config: &AppConfig, payload: &Value) -> Result<PreparedRequest, Value> {
    let Some(api_key) = config.gemini_key() else {
        error!("Environment variable 'GEMINI_KEY' not found");
        return Err(helpers::err_response(
            CODE_INTERNAL,
            "Server configuration (Gemini) incomplete.",
        ));
    };

    match payload.get("text") {
        Some(Value::String(text)) if !text.is_empty() => Ok(PreparedRequest {
            api_key: api_key.to_string(),
            text: text.clone(),
        }),
        _ => {
            error!("Request without text: {:?}", payload);
            Err(helpers::err_response(
                CODE_INVALID_ARGUMENT,
                "The function must be called with a 'text' argument.",
            ))
        }
    }
}

/// Runs the completion call and maps the outcome to a response payload.
/// The backend's error detail is confined to the logs; the caller only ever
/// sees the generic message.
pub async fn complete_text<G: TextGenerator>(generator: &G, text: &str) -> Value {
    match generator.generate(text).await {
        Ok(output) => {
            info!("Completion generated successfully");
            json!({ "text": output })
        }
        Err(e) => {
            error!("Error calling the Gemini API: {}", e);
            helpers::err_response(CODE_INTERNAL, "Could not process the request.")
        }
    }
}
