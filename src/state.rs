//! Application state shared by the interceptor.

use crate::config::PluginOptions;
use crate::context::ProjectContext;
use crate::uuid_store::UuidStore;
use crate::wsl::WSL_DISTRO_ENV;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Host plugin options.
    pub options: Arc<PluginOptions>,
    /// Injected host build context.
    pub context: Arc<ProjectContext>,
    /// WSL distribution name, captured once at construction.
    pub wsl_distro: Option<String>,
}

impl AppState {
    /// Create state, capturing `WSL_DISTRO_NAME` from the process environment.
    pub fn new(options: PluginOptions, context: ProjectContext) -> Self {
        Self {
            options: Arc::new(options),
            context: Arc::new(context),
            wsl_distro: std::env::var(WSL_DISTRO_ENV).ok(),
        }
    }

    /// Identifier store bound to the context's cache directory.
    pub fn uuid_store(&self) -> UuidStore {
        UuidStore::new(self.context.cache_dir.clone())
    }
}
