//! Run configuration
//!
//! Settings shared by every command live in a small TOML file. Values
//! resolve in precedence order: command-line flags, then environment
//! variables, then the config file, then built-in defaults. The file is
//! optional; a missing file means defaults all the way down.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoadgraphError};
use crate::network::CostAttribute;

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "roadgraph.toml";

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

/// Settings applied to every command unless overridden on the command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RunConfig {
    /// Config format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Network file to analyze
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<PathBuf>,

    /// Road attribute read as the edge cost
    #[serde(default)]
    pub cost_attribute: CostAttribute,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            network: None,
            cost_attribute: CostAttribute::default(),
        }
    }
}

impl RunConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RunConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Write config to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RoadgraphError::Other(format!("failed to serialize config: {e}")))?;
        fs::write(path, content)?;
        Ok(())
    }
}
