//! Host-provided build context.

use crate::config::WorkspaceConfig;
use std::io;
use std::path::PathBuf;

/// Read-only context the host supplies: where the project lives and where
/// build caches go.
///
/// Injected explicitly into the store and interceptor rather than read from
/// ambient process state, so both can be exercised without a real host server.
#[derive(Clone, Debug)]
pub struct ProjectContext {
    /// Project root path.
    pub root_path: PathBuf,
    /// Cache directory holding the persisted identifier.
    pub cache_dir: PathBuf,
}

impl ProjectContext {
    /// Create a context from explicit paths.
    pub fn new(root_path: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            cache_dir: cache_dir.into(),
        }
    }

    /// Build the context from workspace configuration.
    ///
    /// Falls back to the current working directory for the root and to
    /// `<root>/.cache/devtools-json` for the cache directory.
    pub fn from_workspace(config: &WorkspaceConfig) -> io::Result<Self> {
        let root_path = match &config.root_path {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };

        let cache_dir = config
            .cache_dir
            .clone()
            .unwrap_or_else(|| root_path.join(".cache").join("devtools-json"));

        Ok(Self {
            root_path,
            cache_dir,
        })
    }
}
