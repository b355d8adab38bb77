//! Route configuration.

use crate::devtools::devtools_json_middleware;
use crate::state::AppState;
use axum::middleware;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Install the DevTools workspace interceptor on a host router.
///
/// Requests to the well-known path are answered by the interceptor; everything
/// else reaches the host's own routes unchanged.
pub fn with_devtools_json(router: Router, state: AppState) -> Router {
    router.layer(middleware::from_fn_with_state(
        state,
        devtools_json_middleware,
    ))
}

/// Create the standalone host router.
///
/// Serves the workspace root as static files with the interceptor layered on
/// top, so the browser can fetch both sources and workspace metadata from the
/// same origin.
pub fn create_router(state: AppState) -> Router {
    let files = ServeDir::new(&state.context.root_path);
    let router = Router::new().fallback_service(files);
    with_devtools_json(router, state).layer(TraceLayer::new_for_http())
}
