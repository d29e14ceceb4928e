//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{GenerateCommand, ValidateCommand};
use std::ffi::OsString;

/// Cloud Build pipeline generator for Terraform workspaces
#[derive(Debug, Parser, Clone)]
#[command(name = "cloudbuild-gen")]
#[command(version)]
#[command(about = "Generates Cloud Build pipelines for Terraform workspaces", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a pipeline from _WORKSPACES, _TF_VERSION and _PR_NUMBER
    Generate(GenerateCommand),

    /// Validate a pipeline file
    Validate(ValidateCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["cloudbuild-gen", "generate"]).unwrap();
        match cli.command {
            Command::Generate(cmd) => {
                assert_eq!(cmd.output, "cloudbuild_generated.yaml");
                assert!(!cmd.stdout);
                assert!(cmd.set.is_empty());
            }
            other => panic!("Expected generate, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_overrides() {
        let cli = Cli::try_parse_from([
            "cloudbuild-gen",
            "-v",
            "generate",
            "-o",
            "out.yaml",
            "--set",
            "_WORKSPACES=prod",
            "--set",
            "_TF_VERSION=1.9",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Command::Generate(cmd) => {
                assert_eq!(cmd.output, "out.yaml");
                let overrides = cmd.overrides();
                assert_eq!(overrides.get("_WORKSPACES"), Some(&"prod".to_string()));
                assert_eq!(overrides.get("_TF_VERSION"), Some(&"1.9".to_string()));
            }
            other => panic!("Expected generate, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_requires_file() {
        assert!(Cli::try_parse_from(["cloudbuild-gen", "validate"]).is_err());
    }
}
