use thiserror::Error;

#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("Required configuration value missing: {0}")]
    ConfigError(String),

    #[error("Invalid request argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to access Gemini API: {0}")]
    GeminiError(String),

    #[error("Failed to access SendGrid API: {0}")]
    SendGridError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for FunctionError {
    fn from(error: reqwest::Error) -> Self {
        FunctionError::HttpError(error.to_string())
    }
}
