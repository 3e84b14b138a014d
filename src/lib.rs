//! CRM Functions - serverless backend handlers for the MaicoSoft CRM.
//!
//! This crate implements a two-Lambda architecture:
//! 1. A chat Lambda that proxies free-text prompts to the Gemini API and
//!    returns the generated completion to the caller.
//! 2. A notifier Lambda that reacts to customer-record update events and
//!    sends an activation email through SendGrid when a customer's status
//!    transitions to "Ativo".
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - reqwest for the Gemini and SendGrid HTTP APIs
//! - Tokio for async runtime
//!
//! The two handlers are fully independent: they share no state, and each
//! resolves its own API key from process configuration on every invocation.

// Module declarations
pub mod chat;
pub mod core;
pub mod errors;
pub mod gemini;
pub mod notifier;
pub mod sendgrid;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// crm_functions::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
