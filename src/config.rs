use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{RecipeBotError, Result};
use crate::persona::PersonaConfig;
use crate::providers::openai::{OpenAiProvider, DEFAULT_BASE_URL};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const MODEL_ENV: &str = "MODEL_NAME";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub openai: Option<OpenAiConfig>,
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source shaped like the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| non_blank(lookup(key).as_ref());
        Self {
            openai: Some(OpenAiConfig {
                api_key: value(API_KEY_ENV),
                model: value(MODEL_ENV),
                base_url: value(BASE_URL_ENV),
            }),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            RecipeBotError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|e| RecipeBotError::Config(e.to_string()))
    }

    pub fn persona(&self) -> PersonaConfig {
        let model = self
            .openai
            .as_ref()
            .and_then(|openai| non_blank(openai.model.as_ref()));
        PersonaConfig::recipe_assistant(model)
    }

    pub fn provider(&self) -> Result<OpenAiProvider> {
        let openai = self
            .openai
            .as_ref()
            .ok_or_else(|| RecipeBotError::Config("missing openai configuration".to_string()))?;
        let api_key = non_blank(openai.api_key.as_ref());
        let base_url = non_blank(openai.base_url.as_ref());

        match (api_key, base_url) {
            (Some(api_key), base_url) => Ok(OpenAiProvider::new(api_key, base_url)),
            // Self-hosted OpenAI-compatible servers usually run without a key.
            (None, Some(base_url)) if base_url.trim_end_matches('/') != DEFAULT_BASE_URL => {
                Ok(OpenAiProvider::new(String::new(), Some(base_url)))
            }
            (None, _) => Err(RecipeBotError::Config(format!(
                "{API_KEY_ENV} is required for {DEFAULT_BASE_URL}"
            ))),
        }
    }
}
