// Environment configuration
//
// One required credential, read once at startup and threaded into the
// backend constructor. Nothing else in the crate touches the environment.

use thiserror::Error;

use crate::gemini::GeminiClient;

const API_KEY_VAR: &str = "GEMINI_API_KEY";
const MODEL_VAR: &str = "GEMINI_MODEL";

/// Fatal configuration problem. Not recoverable at runtime.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable is not set or empty")]
    MissingApiKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    /// Model override; defaults to the client's built-in model when absent.
    pub model: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let model = std::env::var(MODEL_VAR)
            .ok()
            .filter(|model| !model.trim().is_empty());
        Ok(Self { api_key, model })
    }

    /// Build the Gemini backend from this configuration.
    pub fn build_backend(&self) -> anyhow::Result<GeminiClient> {
        let client = GeminiClient::new(self.api_key.clone())?;
        Ok(match &self.model {
            Some(model) => client.with_model(model.clone()),
            None => client,
        })
    }
}
