//! Error types for pipeline generation

use std::path::PathBuf;
use thiserror::Error;

/// Error types for generating, writing and reading pipeline documents
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to serialize pipeline")]
    Serialize(#[source] serde_yaml::Error),

    #[error("Failed to parse pipeline")]
    Parse(#[source] serde_yaml::Error),

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid pipeline: {0}")]
    Invalid(String),

    #[error("Generated file does not match the built pipeline: {0}")]
    Verification(String),
}
