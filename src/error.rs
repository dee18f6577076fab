//! Error taxonomy: input, model-load, and schema-mismatch failures.
//! Everything is fatal; the pipeline has no retry or partial-output path.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("input has no header row")]
    EmptyInput,

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("invalid model file {}: {reason}", path.display())]
    InvalidModel { path: PathBuf, reason: String },

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("event types unseen at training time: {}", columns.join(", "))]
    UnknownEventTypes { columns: Vec<String> },

    #[error("feature column '{0}' required by the model is absent from this batch")]
    AbsentFeature(String),

    #[error("feature matrix has {actual} columns, model expects {expected}")]
    FeatureWidth { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
