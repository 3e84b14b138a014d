use std::env;

/// Process-wide configuration resolved from the Lambda environment.
///
/// Both keys are optional at load time; each handler checks the key it
/// needs on every invocation, so a missing key only affects the handler
/// that depends on it.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub sendgrid_api_key: Option<String>,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_KEY").ok(),
            sendgrid_api_key: env::var("SENDGRID_KEY").ok(),
        }
    }

    /// Returns the Gemini API key, treating empty values as unset.
    #[must_use]
    pub fn gemini_key(&self) -> Option<&str> {
        self.gemini_api_key.as_deref().filter(|k| !k.is_empty())
    }

    /// Returns the SendGrid API key, treating empty values as unset.
    #[must_use]
    pub fn sendgrid_key(&self) -> Option<&str> {
        self.sendgrid_api_key.as_deref().filter(|k| !k.is_empty())
    }
}
