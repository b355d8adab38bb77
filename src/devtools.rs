//! The DevTools workspace interceptor.

use crate::error::ApiResult;
use crate::state::AppState;
use crate::wsl;
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Well-known path Chrome DevTools probes for workspace metadata.
pub const ENDPOINT: &str = "/.well-known/appspecific/com.chrome.devtools.json";

/// Workspace descriptor returned to DevTools.
#[derive(Debug, Serialize)]
pub struct DevtoolsJson {
    /// The workspace association.
    pub workspace: Workspace,
}

/// The workspace payload: where the project lives and its identifier.
#[derive(Debug, Serialize)]
pub struct Workspace {
    /// Workspace root path as reported to the browser.
    pub root: String,
    /// Persisted per-project identifier.
    pub uuid: String,
}

/// Intercept requests to [`ENDPOINT`]; everything else passes through
/// untouched.
///
/// The HTTP method is deliberately not checked: any request matching the path
/// is answered identically, and the body is never read.
pub async fn devtools_json_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> ApiResult<Response> {
    if req.uri().path() != ENDPOINT {
        return Ok(next.run(req).await);
    }

    let root = resolve_root(&state);
    let uuid = state
        .uuid_store()
        .get_or_create(state.options.uuid.as_deref())?;

    let descriptor = DevtoolsJson {
        workspace: Workspace { root, uuid },
    };
    let body = serde_json::to_string_pretty(&descriptor)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Resolve the workspace root.
///
/// An explicit option wins and is reported as-is; otherwise the host context
/// root is used, rewritten to UNC form when running under WSL.
fn resolve_root(state: &AppState) -> String {
    if let Some(root) = &state.options.root_path {
        return root.display().to_string();
    }

    let root = state.context.root_path.display().to_string();
    match &state.wsl_distro {
        Some(distro) => wsl::unc_root(distro, &root),
        None => root,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PluginOptions;
    use crate::context::ProjectContext;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn state(options: PluginOptions, wsl_distro: Option<&str>) -> AppState {
        AppState {
            options: Arc::new(options),
            context: Arc::new(ProjectContext::new("/home/user/project", "/tmp/cache")),
            wsl_distro: wsl_distro.map(str::to_string),
        }
    }

    #[test]
    fn context_root_used_when_unconfigured() {
        let state = state(PluginOptions::default(), None);
        assert_eq!(resolve_root(&state), "/home/user/project");
    }

    #[test]
    fn wsl_rewrite_applies_to_context_root() {
        let state = state(PluginOptions::default(), Some("Ubuntu"));
        assert_eq!(
            resolve_root(&state),
            r"\\wsl.localhost\Ubuntu\home\user\project"
        );
    }

    #[test]
    fn explicit_root_suppresses_wsl_rewrite() {
        let options = PluginOptions {
            uuid: None,
            root_path: Some(PathBuf::from("/repo")),
        };
        let state = state(options, Some("Ubuntu"));
        assert_eq!(resolve_root(&state), "/repo");
    }
}
