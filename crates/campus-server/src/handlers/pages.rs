//! Static context pages.

use std::sync::Arc;

use axum::Extension;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use serde::Serialize;

use crate::context::RequestContext;
use crate::error::PageError;
use crate::handlers::render;
use crate::state::AppState;

#[derive(Serialize)]
struct Page {
    title: &'static str,
}

/// Handle GET /.
pub(crate) async fn home(
    State(state): State<Arc<AppState>>,
    Extension(locals): Extension<RequestContext>,
) -> Result<Html<String>, PageError> {
    render(&state, "home.html", &locals, Page { title: "Welcome Home" })
}

/// Handle GET /about.
pub(crate) async fn about(
    State(state): State<Arc<AppState>>,
    Extension(locals): Extension<RequestContext>,
) -> Result<Html<String>, PageError> {
    render(&state, "about.html", &locals, Page { title: "About" })
}

/// Handle GET /demo.
pub(crate) async fn demo(
    State(state): State<Arc<AppState>>,
    Extension(locals): Extension<RequestContext>,
) -> Result<Html<String>, PageError> {
    render(
        &state,
        "demo.html",
        &locals,
        Page {
            title: "Middleware Demo Page",
        },
    )
}

/// Handle GET /test-error.
pub(crate) async fn test_error() -> Result<Html<String>, PageError> {
    Err(PageError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "This is a test error".to_owned(),
    })
}
