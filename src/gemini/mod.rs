//! Gemini API integration.
//!
//! Encapsulates the outbound call to the generative-text backend behind the
//! [`TextGenerator`](client::TextGenerator) trait so handlers can be tested
//! with mock backends.

pub mod client;

pub use client::{GEMINI_MODEL, GEMINI_TEMPERATURE, GeminiClient, TextGenerator};
