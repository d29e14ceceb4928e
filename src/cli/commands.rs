//! CLI command definitions

use crate::core::writer::DEFAULT_OUTPUT;
use clap::Args;
use std::collections::HashMap;

/// Generate a pipeline
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Path of the generated YAML file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Print the pipeline to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Parameter overrides taking precedence over the environment (key=value)
    #[arg(long, value_parser = parse_key_value)]
    pub set: Vec<(String, String)>,
}

impl GenerateCommand {
    /// Overrides as a lookup table; later duplicates win
    pub fn overrides(&self) -> HashMap<String, String> {
        self.set.iter().cloned().collect()
    }
}

/// Validate a pipeline file
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to pipeline YAML file
    #[arg(short, long)]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Parse key=value pairs
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.splitn(2, '=').collect();
    if parts.len() != 2 {
        return Err(format!("Invalid key=value pair: {}", s));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}
