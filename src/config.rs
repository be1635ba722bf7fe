use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use kairos_datetime::ISO8601_TIMESTAMP;

/// Top-level Kairos configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct KairosConfig {
    /// Fallback values for omitted CLI flags.
    #[serde(default)]
    pub defaults: DefaultsToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsToml {
    /// Pattern assumed for inputs when `--from` is not given.
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// IANA time zone assumed when `--timezone` is not given.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Default for DefaultsToml {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            timezone: None,
        }
    }
}

fn default_pattern() -> String {
    ISO8601_TIMESTAMP.to_string()
}

/// Load the configuration file, falling back to defaults when it does
/// not exist.
pub fn load(path: &Path) -> Result<KairosConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(KairosConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
