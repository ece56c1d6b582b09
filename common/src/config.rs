//! Endpoint and chat configuration
//!
//! Defaults match the deployed services. Every field may be overridden by a
//! JSON document; missing fields keep their defaults.

use crate::chat::DEFAULT_SYSTEM_PROMPT;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Plant-disease classification endpoint
pub const DEFAULT_DIAGNOSIS_ENDPOINT: &str = "http://localhost:5000/submit";

/// Language-model chat endpoint
pub const DEFAULT_CHAT_ENDPOINT: &str = "https://kisansathi.janmejaychatterjee.workers.dev/ask";

/// Non-system transcript entries kept before the oldest are dropped
pub const DEFAULT_MAX_HISTORY: usize = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub diagnosis_endpoint: String,
    pub chat_endpoint: String,
    pub system_prompt: String,
    pub max_history: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            diagnosis_endpoint: DEFAULT_DIAGNOSIS_ENDPOINT.into(),
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

impl Config {
    /// Parse a JSON override document and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.diagnosis_endpoint.trim().is_empty() {
            return Err(Error::Config("diagnosis_endpoint is empty".into()));
        }
        if self.chat_endpoint.trim().is_empty() {
            return Err(Error::Config("chat_endpoint is empty".into()));
        }
        if self.max_history == 0 {
            return Err(Error::Config("max_history must be at least 1".into()));
        }
        Ok(())
    }
}
