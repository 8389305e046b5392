//! Static file serving.
//!
//! Files are served from the configured public directory. Requests that match
//! no file fall through to the not-found page.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use tower_http::services::ServeDir;

use crate::error::PageError;
use crate::state::AppState;

/// Create the fallback router serving `public_dir`.
pub(crate) fn static_router(public_dir: &Path) -> Router<Arc<AppState>> {
    let files = ServeDir::new(public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new().fallback_service(files)
}

/// Fallback for unmatched paths and unsupported methods.
pub(crate) async fn not_found() -> PageError {
    PageError::NotFound("Page Not Found".to_owned())
}
