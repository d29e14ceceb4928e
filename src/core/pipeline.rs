//! Pipeline document model

use crate::core::{error::GenerateError, step::Step};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A Cloud Build pipeline document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Steps in declaration order
    pub steps: Vec<Step>,
}

impl Pipeline {
    /// Load a pipeline document from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GenerateError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a pipeline document from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, GenerateError> {
        serde_yaml::from_str(yaml).map_err(GenerateError::Parse)
    }

    /// Get a step by ID
    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Step IDs in declaration order
    pub fn step_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.id.as_str()).collect()
    }

    /// Validate the pipeline
    ///
    /// Step IDs must be unique and every `waitFor` entry must name a step
    /// declared earlier in the list.
    pub fn validate(&self) -> Result<(), GenerateError> {
        let mut seen = HashSet::new();
        for step in &self.steps {
            for dep in &step.wait_for {
                if !seen.contains(dep.as_str()) {
                    return Err(GenerateError::Invalid(format!(
                        "Step '{}' waits for '{}', which is not declared before it",
                        step.id, dep
                    )));
                }
            }
            if !seen.insert(step.id.as_str()) {
                return Err(GenerateError::Invalid(format!(
                    "Duplicate step ID: {}",
                    step.id
                )));
            }
        }
        Ok(())
    }
}
