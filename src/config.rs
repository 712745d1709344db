//! Configuration System
//!
//! Hierarchical configuration for graph traversal and logging. Sources
//! are merged with the `config` crate, lowest precedence first: built-in
//! defaults, the global user file, workspace files, then environment variables.

use crate::error::ContextError;
use crate::logging::LoggingConfig;
use config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

mod merge;

/// Prefix for environment overrides, e.g. `CONTEXT_GRAPH__GRAPH__CYCLE_GUARD=false`.
pub const ENV_PREFIX: &str = "CONTEXT_GRAPH";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Traversal settings applied to every graph created from this config
    #[serde(default)]
    pub graph: GraphSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Traversal settings for a context graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSettings {
    /// Track visited nodes during flatten so a broken tree cannot loop forever
    #[serde(default = "default_true")]
    pub cycle_guard: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            cycle_guard: default_true(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl GraphConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Path to the per-user config file:
/// `$XDG_CONFIG_HOME/context-graph/config.toml`, falling back to
/// `~/.config/context-graph/config.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => PathBuf::from(std::env::var_os("HOME")?).join(".config"),
    };
    Some(base.join("context-graph").join("config.toml"))
}

/// Config files for a workspace, lowest precedence first. None of them has to
/// exist.
fn file_layers(workspace_root: &Path) -> Vec<PathBuf> {
    let profile =
        std::env::var(format!("{}_ENV", ENV_PREFIX)).unwrap_or_else(|_| "development".into());
    let config_dir = workspace_root.join("config");
    global_config_path()
        .into_iter()
        .chain([
            config_dir.join("config.toml"),
            config_dir.join(format!("{}.toml", profile)),
        ])
        .collect()
}

/// Loads [`GraphConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace root.
    ///
    /// Precedence (highest last): defaults, global config file,
    /// `<root>/config/config.toml`, `<root>/config/{CONTEXT_GRAPH_ENV}.toml`,
    /// `CONTEXT_GRAPH__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<GraphConfig, ContextError> {
        let layers = file_layers(workspace_root);
        debug!(?layers, "Loading configuration");

        let builder = layers
            .iter()
            .fold(merge::builder_with_defaults()?, |builder, path| {
                builder.add_source(File::from(path.as_path()).required(false))
            })
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        let config: GraphConfig = builder.build()?.try_deserialize()?;
        Self::checked(config)
    }

    /// Load configuration from a single file on top of the defaults.
    pub fn load_from_file(path: &Path) -> Result<GraphConfig, ContextError> {
        let config: GraphConfig = merge::builder_with_defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;
        Self::checked(config)
    }

    fn checked(config: GraphConfig) -> Result<GraphConfig, ContextError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ContextError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        debug!(graph = ?config.graph, "Configuration loaded");
        Ok(config)
    }
}
