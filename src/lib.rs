//! Chrome DevTools workspace discovery for axum dev servers.
//!
//! Browsers probe dev servers at
//! `/.well-known/appspecific/com.chrome.devtools.json` to associate the served
//! project with a DevTools workspace. This crate provides:
//! - A persisted per-project identifier (`uuid.json` under the cache directory)
//! - A pass-through middleware answering the probe with the workspace descriptor
//! - UNC path rewriting when the server runs inside WSL
//! - A minimal standalone host binary (`devtoolsd`)

pub mod config;
pub mod context;
pub mod devtools;
pub mod error;
pub mod routes;
pub mod state;
pub mod uuid_store;
pub mod wsl;

pub use config::PluginOptions;
pub use context::ProjectContext;
pub use devtools::{devtools_json_middleware, ENDPOINT};
pub use error::ApiError;
pub use routes::{create_router, with_devtools_json};
pub use state::AppState;
pub use uuid_store::UuidStore;
