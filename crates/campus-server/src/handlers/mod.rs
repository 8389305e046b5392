//! HTTP request handlers.
//!
//! Every handler renders one page. Failures are returned as [`PageError`]
//! values and rendered by the error pipeline.
//!
//! [`PageError`]: crate::error::PageError

pub(crate) mod catalog;
pub(crate) mod faculty;
pub(crate) mod pages;

use axum::response::Html;
use serde::Serialize;

use crate::context::RequestContext;
use crate::error::PageError;
use crate::state::AppState;

/// Render `template` with the request locals merged into `page`.
pub(crate) fn render<P: Serialize>(
    state: &AppState,
    template: &str,
    locals: &RequestContext,
    page: P,
) -> Result<Html<String>, PageError> {
    let html = state.views.render_page(template, locals, page)?;
    Ok(Html(html))
}
