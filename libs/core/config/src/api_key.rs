use crate::{env_required, ConfigError, FromEnv};
use std::fmt;

/// Shared secret that callers must present in the `x-api-key` header
#[derive(Clone)]
pub struct ApiKeyConfig {
    key: String,
}

impl ApiKeyConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Exact comparison against the configured key.
    pub fn matches(&self, candidate: &str) -> bool {
        candidate == self.key
    }
}

// Keep the secret out of logs when the config is printed.
impl fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("key", &"<redacted>")
            .finish()
    }
}

impl FromEnv for ApiKeyConfig {
    /// Requires API_KEY to be set to a non-empty value
    fn from_env() -> Result<Self, ConfigError> {
        let key = env_required("API_KEY")?;
        if key.is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_KEY".to_string(),
                details: "must not be empty".to_string(),
            });
        }
        Ok(Self { key })
    }
}
