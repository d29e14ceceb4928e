//! YAML rendering and output of generated pipelines

use crate::core::{error::GenerateError, pipeline::Pipeline};
use std::path::Path;
use tracing::{debug, info};

/// Default output file for `generate`
pub const DEFAULT_OUTPUT: &str = "cloudbuild_generated.yaml";

/// Render a pipeline as a YAML document
pub fn to_yaml(pipeline: &Pipeline) -> Result<String, GenerateError> {
    serde_yaml::to_string(pipeline).map_err(GenerateError::Serialize)
}

/// Render a pipeline and write it to `path`, replacing any existing file
pub fn write_pipeline<P: AsRef<Path>>(path: P, pipeline: &Pipeline) -> Result<(), GenerateError> {
    let path = path.as_ref();
    let yaml = to_yaml(pipeline)?;
    debug!("Writing {} bytes to {}", yaml.len(), path.display());

    std::fs::write(path, yaml).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote {} steps to {}", pipeline.steps.len(), path.display());
    Ok(())
}

/// Read `path` back and check it holds exactly `expected`
pub fn verify_written<P: AsRef<Path>>(path: P, expected: &Pipeline) -> Result<(), GenerateError> {
    let written = Pipeline::from_file(path)?;

    if written.steps.len() != expected.steps.len() {
        return Err(GenerateError::Verification(format!(
            "expected {} steps, found {}",
            expected.steps.len(),
            written.steps.len()
        )));
    }
    if let Some((found, want)) = written
        .steps
        .iter()
        .zip(&expected.steps)
        .find(|(found, want)| found != want)
    {
        return Err(GenerateError::Verification(format!(
            "step '{}' differs from '{}'",
            found.id, want.id
        )));
    }
    Ok(())
}
