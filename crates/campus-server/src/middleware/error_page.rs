//! Error pipeline.
//!
//! Handlers and the not-found fallback answer failures with a bare status and a
//! [`ForwardedError`] in the response extensions. This middleware takes the
//! error out of the response and renders the matching error page in its place.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;

use crate::context::RequestContext;
use crate::error::{ForwardedError, PageError};
use crate::state::AppState;
use crate::views::Views;

/// Message shown instead of the real one in production.
const GENERIC_MESSAGE: &str = "An error occurred";

#[derive(Serialize)]
struct ErrorPage {
    title: &'static str,
    error: String,
    stack: Option<String>,
}

/// Middleware that renders forwarded errors.
pub(crate) async fn render_errors(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let locals = req
        .extensions()
        .get::<RequestContext>()
        .cloned()
        .unwrap_or_default();

    let mut response = next.run(req).await;
    match response.extensions_mut().remove::<ForwardedError>() {
        Some(ForwardedError(error)) => error_page(&state.views, state.production, &locals, &error),
        None => response,
    }
}

/// Render the error page for `error`.
///
/// Never fails: if the error template itself cannot be rendered, a minimal
/// inline page with the same status is returned instead.
pub(crate) fn error_page(
    views: &Views,
    production: bool,
    locals: &RequestContext,
    error: &PageError,
) -> Response {
    let status = error.status();
    let (template, title) = if status == StatusCode::NOT_FOUND {
        ("errors/404.html", "Page Not Found")
    } else {
        ("errors/500.html", "Server Error")
    };

    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), error = %error, "Request failed");
    } else {
        tracing::warn!(status = status.as_u16(), error = %error, "Request failed");
    }

    let page = if production {
        ErrorPage {
            title,
            error: GENERIC_MESSAGE.to_owned(),
            stack: None,
        }
    } else {
        ErrorPage {
            title,
            error: error.to_string(),
            stack: Some(error.detail()),
        }
    };

    match views.render_page(template, locals, page) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(template, error = %err, "Failed to render error page");
            (status, Html(fallback_body(status))).into_response()
        }
    }
}

fn fallback_body(status: StatusCode) -> String {
    format!("<h1>Error {}</h1><p>An error occurred.</p>", status.as_u16())
}
