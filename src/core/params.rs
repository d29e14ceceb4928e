//! Generation parameters resolved from the environment

use std::collections::HashMap;
use tracing::{debug, warn};

/// Environment key holding the comma separated workspace list
pub const WORKSPACES_KEY: &str = "_WORKSPACES";
/// Environment key holding the Terraform image version
pub const TF_VERSION_KEY: &str = "_TF_VERSION";
/// Environment key holding the pull request number
pub const PR_NUMBER_KEY: &str = "_PR_NUMBER";

pub const DEFAULT_WORKSPACES: &str = "dev,staging,gitops";
pub const DEFAULT_TF_VERSION: &str = "1.8";
pub const DEFAULT_PR_NUMBER: &str = "";

/// Inputs to the step builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// Workspace names, in the order they were listed
    pub workspaces: Vec<String>,

    /// Tag of the `hashicorp/terraform` image
    pub tf_version: String,

    /// Pull request number, empty outside pull request builds
    pub pr_number: String,
}

impl Parameters {
    /// Resolve parameters through `lookup`.
    ///
    /// Unset and empty values both fall back to the default.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            match lookup(key).filter(|value| !value.is_empty()) {
                Some(value) => {
                    debug!("{} = {:?}", key, value);
                    value
                }
                None => {
                    debug!("{} unset, using default {:?}", key, default);
                    default.to_string()
                }
            }
        };

        let workspaces = split_workspaces(&get(WORKSPACES_KEY, DEFAULT_WORKSPACES));
        for name in &workspaces {
            if name.is_empty() {
                warn!("Empty workspace name in {}", WORKSPACES_KEY);
            } else if name.trim() != name {
                warn!("Workspace name {:?} has surrounding whitespace", name);
            }
        }

        Self {
            workspaces,
            tf_version: get(TF_VERSION_KEY, DEFAULT_TF_VERSION),
            pr_number: get(PR_NUMBER_KEY, DEFAULT_PR_NUMBER),
        }
    }

    /// Resolve parameters from the process environment
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve parameters, preferring `overrides` over the process environment
    pub fn from_env_with_overrides(overrides: &HashMap<String, String>) -> Self {
        Self::resolve(|key| {
            overrides
                .get(key)
                .cloned()
                .or_else(|| std::env::var(key).ok())
        })
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::resolve(|_| None)
    }
}

/// Split a comma separated workspace list.
///
/// Names are kept verbatim: no trimming, empty entries included.
pub fn split_workspaces(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
