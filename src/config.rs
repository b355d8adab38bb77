//! Configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Plugin options supplied by the host.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PluginOptions {
    /// Fixed identifier for the DevTools project settings.
    /// When set, the persisted identifier file is neither read nor written,
    /// and the value is reported verbatim without validation.
    #[serde(default)]
    pub uuid: Option<String>,
    /// Workspace root reported to DevTools. In a monorepo this can point at
    /// the repository root instead of the package being served.
    /// When set, the WSL path rewrite is disabled.
    #[serde(default)]
    pub root_path: Option<PathBuf>,
}

/// Server configuration (standalone host only).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Workspace configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Project root. Defaults to the current working directory.
    #[serde(default)]
    pub root_path: Option<PathBuf>,
    /// Cache directory holding the persisted identifier.
    /// Defaults to `<root>/.cache/devtools-json`.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    /// Fixed identifier override (see [`PluginOptions::uuid`]).
    #[serde(default)]
    pub uuid: Option<String>,
}

impl WorkspaceConfig {
    /// Plugin options carried by this configuration.
    ///
    /// A configured `root_path` counts as explicit: it is reported as-is and
    /// suppresses the WSL rewrite, same as a host passing the option directly.
    pub fn plugin_options(&self) -> PluginOptions {
        PluginOptions {
            uuid: self.uuid.clone(),
            root_path: self.root_path.clone(),
        }
    }
}

/// Complete application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Workspace configuration.
    #[serde(default)]
    pub workspace: WorkspaceConfig,
}

impl AppConfig {
    /// Create a test configuration with an ephemeral bind port.
    ///
    /// **For testing only.**
    pub fn for_testing() -> Self {
        Self {
            server: ServerConfig {
                bind: "127.0.0.1:0".to_string(),
            },
            workspace: WorkspaceConfig::default(),
        }
    }
}
