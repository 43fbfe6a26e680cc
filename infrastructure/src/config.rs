use domain::{GenerationParams, Persona};
use dotenvy::dotenv;
use std::env;
use std::fmt;
use thiserror::Error;

pub const API_KEY_VAR: &str = "FIREWORKS_API_KEY";
pub const API_URL_VAR: &str = "FIREWORKS_API_URL";
pub const MODEL_VAR: &str = "FIREWORKS_MODEL";
pub const DEFAULT_API_URL: &str = "https://api.fireworks.ai/inference/v1/chat/completions";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing {var}. Set it in the environment variables.")]
    MissingCredential { var: &'static str },
}

/// Bearer token for the inference endpoint. `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub api_key: ApiKey,
    pub generation: GenerationParams,
    pub persona: Persona,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            api_url: api_url.into(),
            api_key,
            generation: GenerationParams::default(),
            persona: Persona::default(),
        }
    }

    /// Read the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let api_key = non_empty(API_KEY_VAR)
            .map(ApiKey::new)
            .ok_or(ConfigError::MissingCredential { var: API_KEY_VAR })?;
        let api_url = non_empty(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut config = Self::new(api_url, api_key);
        if let Some(model) = non_empty(MODEL_VAR) {
            config.generation.model = model;
        }
        Ok(config)
    }
}
