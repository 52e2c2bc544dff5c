//! Agent configuration, loadable from TOML.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use hs_log_tools::TailConfig;

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/hostscope/agent.toml";

/// Top-level configuration for the agent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentConfig {
    /// Log source resolution and defaults.
    #[serde(default)]
    pub tail: TailConfig,
    /// Write responses as indented JSON instead of one line each.
    #[serde(default)]
    pub pretty_output: bool,
}

impl AgentConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Load an explicitly given config, or the default file if it exists.
    ///
    /// An explicit path must exist; a missing default file yields built-in
    /// defaults.
    pub fn load(explicit: Option<&str>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }
}
