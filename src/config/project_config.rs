//! Project-level configuration support
//!
//! Loads per-directory configuration from `readability.toml` or
//! `.readabilityrc.json`.
//!
//! # Configuration Format
//!
//! ```toml
//! # readability.toml
//!
//! [defaults]
//! metric = "all"          # ARI, FK, SMOG, CL or all
//! policy = "round"        # round or ceiling
//! format = "text"         # text, json, markdown
//! no_emoji = false
//! fail_above_age = 16.0   # exit 1 when the reader age exceeds this
//! ```

use crate::models::AgePolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Config file names, in lookup order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["readability.toml", ".readabilityrc.json"];

/// Project-level configuration loaded from readability.toml or similar
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Default values for `analyze` flags. CLI flags win over these.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CliDefaults {
    /// Metric selection (ARI, FK, SMOG, CL, all)
    #[serde(default)]
    pub metric: Option<String>,

    /// Age policy (round, ceiling)
    #[serde(default)]
    pub policy: Option<AgePolicy>,

    /// Output format (text, json, markdown)
    #[serde(default)]
    pub format: Option<String>,

    /// Disable emoji by default
    #[serde(default)]
    pub no_emoji: Option<bool>,

    /// Reader-age threshold for CI
    #[serde(default)]
    pub fail_above_age: Option<f64>,
}

/// Load project configuration from `dir`.
///
/// Searches for configuration files in this order:
/// 1. `readability.toml`
/// 2. `.readabilityrc.json`
///
/// Unreadable or invalid files are logged and skipped. Returns the default
/// configuration if no usable file is found.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join(CONFIG_FILE_NAMES[0]);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(CONFIG_FILE_NAMES[1]);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load configuration from a TOML file
fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration from a JSON file
fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Example `readability.toml` written by `readability init`
pub fn example_config() -> &'static str {
    r#"# Readability Configuration
#
# CLI flags override every value below.

[defaults]
# Metric to report: ARI, FK, SMOG, CL or all
metric = "all"

# Age policy: "round" (upper-bound age) or "ceiling" (age range)
policy = "round"

# Output format: text, json, markdown
format = "text"

# Disable emoji in output
no_emoji = false

# Exit with code 1 when the estimated reader age exceeds this value
# fail_above_age = 16.0
"#
}
