//! Run configuration (conf.yaml)
//!
//! One YAML file supplies everything a run needs: the two endpoints, the
//! ordered list of coordinates to copy, and optionally the staging directory
//! and the verbosity. There are no command-line flags beyond the file path.
//!
//! ```yaml
//! source:
//!   url: https://repo.example.com/releases
//! target:
//!   url: https://mirror.example.com/releases
//!   username: deploy
//!   password: secret
//! artifact:
//!   - org.example:demo
//!   - org.example:other-lib
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{CopyError, Result};
use crate::repository::{Credentials, RepositoryEndpoint};

/// Top-level configuration mapping
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub source: EndpointConfig,
    pub target: EndpointConfig,

    /// Coordinate strings to copy, processed in order
    #[serde(default)]
    pub artifact: Vec<String>,

    /// Staging directory override (default `repository`)
    #[serde(default)]
    pub local_repository: Option<String>,

    /// Step-by-step trace output
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

fn default_verbose() -> bool {
    true
}

/// One endpoint descriptor as configured
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    pub url: String,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl Config {
    /// Load and validate the configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CopyError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| CopyError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| CopyError::ConfigParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.source.validate("source")?;
        self.target.validate("target")
    }
}

impl EndpointConfig {
    fn validate(&self, id: &str) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(CopyError::ConfigInvalid {
                message: format!("{id}: url must not be empty"),
            });
        }
        if self.username.is_some() != self.password.is_some() {
            return Err(CopyError::ConfigInvalid {
                message: format!("{id}: username and password must be configured together"),
            });
        }
        Ok(())
    }

    /// Build the immutable endpoint this descriptor configures
    pub fn to_endpoint(&self, id: &str) -> RepositoryEndpoint {
        let credentials = match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(Credentials {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        };
        RepositoryEndpoint::new(id, self.url.clone(), credentials)
    }
}
