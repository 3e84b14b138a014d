use serde_json::{Value, json};

/// Error code for a malformed caller payload.
pub const CODE_INVALID_ARGUMENT: &str = "invalid-argument";

/// Error code for server-side failures (missing configuration, upstream
/// errors). The message is always generic; real causes go to the logs.
pub const CODE_INTERNAL: &str = "internal";

/// Builds the typed error payload returned to the caller.
#[must_use]
pub fn err_response(code: &str, message: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}
