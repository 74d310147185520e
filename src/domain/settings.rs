//! Runtime settings resolved once at startup.

use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::domain::AppError;

pub const API_KEY_VAR: &str = "NVIDIA_API_KEY";
pub const BASE_URL_VAR: &str = "NEMO_DD_BASE_URL";
pub const MODEL_ALIAS_VAR: &str = "MODEL_ALIAS";
pub const TOPIC_VAR: &str = "PRINCIPLE_TOPIC";
pub const OUTPUT_DIR_VAR: &str = "PRINCIPLE_OUTPUT_DIR";

pub const DEFAULT_BASE_URL: &str = "https://ai.api.nvidia.com/v1/nemo/dd";
pub const DEFAULT_MODEL_ALIAS: &str = "nemotron-nano-v2";
pub const DEFAULT_TOPIC: &str = "Data Integration";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Everything a generation run needs from its host environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Bearer credential for the hosted service. Checked lazily by the pipeline.
    pub api_key: Option<String>,
    /// Data Designer base address.
    pub base_url: Url,
    /// Model alias referenced by every generated column.
    pub model_alias: String,
    /// Principle topic.
    pub topic: String,
    /// Directory receiving the rendered document.
    pub output_dir: PathBuf,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model_alias", &self.model_alias)
            .field("topic", &self.topic)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model_alias: DEFAULT_MODEL_ALIAS.to_string(),
            topic: DEFAULT_TOPIC.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    ///
    /// Blank values are treated the same as unset ones; other values are kept as given.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let base_url = match read(BASE_URL_VAR) {
            Some(raw) => parse_base_url(&raw)?,
            None => default_base_url(),
        };

        Ok(Self {
            api_key: read(API_KEY_VAR),
            base_url,
            model_alias: read(MODEL_ALIAS_VAR).unwrap_or_else(|| DEFAULT_MODEL_ALIAS.to_string()),
            topic: read(TOPIC_VAR).unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
            output_dir: read(OUTPUT_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        })
    }

    /// Return the API key, failing before any network activity if it is missing.
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::config_error(format!(
                "{API_KEY_VAR} is not set. Set it in your environment or .env file before running."
            ))
        })
    }
}

pub fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    Url::parse(raw)
        .map_err(|e| AppError::config_error(format!("Invalid {BASE_URL_VAR} '{raw}': {e}")))
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("Default base URL must be valid")
}
