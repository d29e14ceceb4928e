//! Step domain model

use serde::{Deserialize, Serialize};

/// A single step in a Cloud Build pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Unique step identifier
    pub id: String,

    /// Container image the step runs in
    #[serde(rename = "name")]
    pub image: String,

    /// Interpreter invoked in the image
    pub entrypoint: String,

    /// Arguments passed to the entrypoint
    pub args: Vec<String>,

    /// IDs of steps that must finish before this one starts
    #[serde(rename = "waitFor", default, skip_serializing_if = "Vec::is_empty")]
    pub wait_for: Vec<String>,
}

impl Step {
    /// Create a step that runs `script` through `entrypoint -c`
    pub fn shell(
        id: impl Into<String>,
        image: impl Into<String>,
        entrypoint: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            image: image.into(),
            entrypoint: entrypoint.into(),
            args: vec!["-c".to_string(), script.into()],
            wait_for: Vec::new(),
        }
    }

    /// Declare a dependency on another step
    pub fn wait_for(mut self, step_id: impl Into<String>) -> Self {
        self.wait_for.push(step_id.into());
        self
    }

    /// The shell script passed after `-c`, if any
    pub fn script(&self) -> Option<&str> {
        match self.args.as_slice() {
            [flag, script, ..] if flag == "-c" => Some(script.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_step() {
        let step = Step::shell("apply dev", "hashicorp/terraform:1.8", "sh", "echo hi")
            .wait_for("setup and plan dev");

        assert_eq!(step.args, vec!["-c", "echo hi"]);
        assert_eq!(step.script(), Some("echo hi"));
        assert_eq!(step.wait_for, vec!["setup and plan dev"]);
    }

    #[test]
    fn test_serialized_keys() {
        let step = Step::shell("branch name", "ubuntu", "bash", "echo hi");
        let yaml = serde_yaml::to_string(&step).unwrap();

        assert!(yaml.contains("name: ubuntu"));
        assert!(!yaml.contains("image"));
        assert!(!yaml.contains("waitFor"));

        let step = step.wait_for("other");
        let yaml = serde_yaml::to_string(&step).unwrap();
        assert!(yaml.contains("waitFor:"));
    }

    #[test]
    fn test_script_requires_dash_c() {
        let mut step = Step::shell("x", "ubuntu", "bash", "echo hi");
        step.args = vec!["echo".to_string()];
        assert_eq!(step.script(), None);
    }
}
