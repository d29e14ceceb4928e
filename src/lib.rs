//! cloudbuild-gen - generates Cloud Build pipelines for Terraform workspaces

pub mod cli;
pub mod core;

// Re-export commonly used types
pub use crate::core::writer::{to_yaml, verify_written, write_pipeline};
pub use crate::core::{build_pipeline, GenerateError, Parameters, Pipeline, Step};
