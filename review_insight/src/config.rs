//! Configuration file support.
//!
//! Loads optional `.review-insight/config.toml` from a root directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::corpus::ExampleRange;
use crate::error::ConfigError;
use crate::export::EXPORT_FILENAME;
use crate::highlight::Highlighter;

/// Default Hugging Face model behind the sentiment pipeline.
pub const DEFAULT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// Default inference endpoint; `{model}` is replaced with the model id.
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models/{model}";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub classifier: ClassifierConfig,
    pub examples: ExampleRange,
    pub keywords: KeywordConfig,
    pub export: ExportConfig,
}

/// Remote classifier settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Endpoint URL; may contain `{model}`.
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding a bearer token, if any.
    pub token_env: Option<String>,
    /// Request timeout. Unset means no timeout.
    pub timeout_secs: Option<u64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            token_env: Some("HF_TOKEN".to_string()),
            timeout_secs: None,
        }
    }
}

impl ClassifierConfig {
    /// Endpoint with the model id substituted.
    pub fn resolved_endpoint(&self) -> String {
        self.endpoint.replace("{model}", &self.model)
    }
}

/// Extra highlight vocabulary, appended to the built-in lists
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: EXPORT_FILENAME.to_string(),
        }
    }
}

impl InsightConfig {
    /// Path of the config file under `root`.
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(".review-insight").join("config.toml")
    }

    /// Load config from `.review-insight/config.toml` in the given root directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&Self::default_path(root))
    }

    /// Load config from a specific path, falling back to defaults with a warning.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}; using default configuration");
                Self::default()
            }
        }
    }

    /// Load and validate config from `path`, reporting every problem.
    pub fn try_load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.examples.validate()
    }

    /// Highlighter with the configured extra keywords.
    pub fn highlighter(&self) -> Highlighter {
        Highlighter::with_extra_keywords(&self.keywords.positive, &self.keywords.negative)
    }
}
