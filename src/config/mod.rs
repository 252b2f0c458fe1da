//! Configuration module for readability
//!
//! Handles project-level configuration (`readability.toml`) that supplies
//! CLI defaults.

mod project_config;

pub use project_config::{
    example_config, load_project_config, CliDefaults, ProjectConfig, CONFIG_FILE_NAMES,
};
