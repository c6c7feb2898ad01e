//! Configuration System
//!
//! Layered configuration for the `fsplan` binary: built-in defaults, an
//! optional `fsplan.toml` file, then `FSPLAN__SECTION__KEY` environment
//! overrides. The library itself takes no configuration.

use crate::error::PlanError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge;
mod sources;

/// File name looked up in the configuration directory
pub const CONFIG_FILE_NAME: &str = "fsplan.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FsPlanConfig {
    /// Deployment settings
    #[serde(default)]
    pub deploy: DeployConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Deployment settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Directory the planned root is created in (defaults to the working directory)
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Print the rendered tree after a successful deployment
    #[serde(default = "default_true")]
    pub render: bool,

    /// Include file digests in the rendered tree
    #[serde(default = "default_true")]
    pub show_digests: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            render: default_true(),
            show_digests: default_true(),
        }
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `<dir>/fsplan.toml` (if present) over defaults, then environment
    pub fn load(dir: &Path) -> Result<FsPlanConfig, PlanError> {
        let builder = merge::builder_with_defaults()?;
        let builder = sources::add_directory_file(builder, dir);
        let builder = sources::add_environment(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load a specific file over defaults, then environment
    pub fn load_from_file(path: &Path) -> Result<FsPlanConfig, PlanError> {
        if !path.exists() {
            return Err(PlanError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = merge::builder_with_defaults()?;
        let builder = sources::add_file(builder, path);
        let builder = sources::add_environment(builder);
        Ok(builder.build()?.try_deserialize()?)
    }
}
