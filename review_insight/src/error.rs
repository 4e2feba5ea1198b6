//! Error types for the analysis pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a classifier backend or while validating its output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    #[error("failed to load model: {0}")]
    Load(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("classifier returned {got} results for {expected} inputs")]
    LengthMismatch { expected: usize, got: usize },

    #[error("unknown sentiment label '{0}'")]
    UnknownLabel(String),

    #[error("score {0} is outside [0, 1]")]
    ScoreOutOfRange(f64),
}

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("model is not ready")]
    ModelNotReady,

    #[error("an analysis is already in progress")]
    AlreadyAnalyzing,

    #[error("no analysis is in progress")]
    NotAnalyzing,

    #[error("analysis was discarded before it completed")]
    Superseded,

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Failures while handing a CSV document to a download target.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("download could not be started: {0}")]
    Download(String),
}

/// Clipboard write failure. Views swallow it; callers may inspect it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid example range {min}..={max}: need 1 <= min <= max")]
    InvalidExampleRange { min: usize, max: usize },
}
