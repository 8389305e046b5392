//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::handlers::{catalog, faculty, pages};
use crate::middleware::{chain, error_page, headers};
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// Layers run outermost first: security headers, context chain, error
/// pipeline, then routing. Unmatched paths fall through to static files and
/// finally to the not-found page, as do page paths requested with a method
/// they do not serve.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let page_routes = Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/demo", get(pages::demo).layer(headers::demo_headers()))
        .route("/test-error", get(pages::test_error))
        .route("/catalog", get(catalog::list))
        .route("/catalog/{slug}", get(catalog::detail))
        .route("/faculty", get(faculty::list))
        .route("/faculty/{slug}", get(faculty::detail));

    Router::new()
        .merge(page_routes)
        .merge(static_files::static_router(&state.public_dir))
        .method_not_allowed_fallback(static_files::not_found)
        .layer(axum::middleware::from_fn_with_state(
            Arc::clone(&state),
            error_page::render_errors,
        ))
        .layer(axum::middleware::from_fn_with_state(
            Arc::clone(&state),
            chain::attach_context,
        ))
        .layer(headers::security_headers())
        .with_state(state)
}
