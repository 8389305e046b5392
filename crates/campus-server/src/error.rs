//! Server error types.

use std::error::Error as _;
use std::fmt::Write;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use campus_catalog::CatalogError;

/// Failure raised by a route handler.
///
/// Handlers never render error pages. The response produced by
/// [`IntoResponse`] carries only the status and the error itself, which the
/// error pipeline renders into the final page.
#[derive(Debug, thiserror::Error)]
pub(crate) enum PageError {
    /// Unknown route or identifier.
    #[error("{0}")]
    NotFound(String),
    /// Failure with an explicit status.
    #[error("{message}")]
    Status {
        status: StatusCode,
        message: String,
    },
    /// Catalog store failure.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    /// Template rendering failure.
    #[error("Template error: {0}")]
    Render(#[from] minijinja::Error),
}

impl PageError {
    /// HTTP status for this error. Errors without an explicit status map to 500.
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Status { status, .. } => *status,
            Self::Catalog(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Full diagnostic detail, including the chain of underlying causes.
    pub(crate) fn detail(&self) -> String {
        let mut detail = format!("{self:?}");
        let mut source = self.source();
        while let Some(err) = source {
            let _ = write!(detail, "\ncaused by: {err}");
            source = err.source();
        }
        detail
    }
}

/// Error handed from a handler to the error pipeline through response extensions.
#[derive(Clone, Debug)]
pub(crate) struct ForwardedError(pub(crate) Arc<PageError>);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let mut response = self.status().into_response();
        response
            .extensions_mut()
            .insert(ForwardedError(Arc::new(self)));
        response
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use campus_catalog::CatalogErrorKind;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            PageError::NotFound("Course X not found".to_owned()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            PageError::Status {
                status: StatusCode::BAD_GATEWAY,
                message: "upstream".to_owned(),
            }
            .status(),
            StatusCode::BAD_GATEWAY
        );
        let catalog = CatalogError::new(CatalogErrorKind::Unavailable);
        assert_eq!(
            PageError::from(catalog).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_is_bare_message() {
        let err = PageError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "This is a test error".to_owned(),
        };

        assert_eq!(err.to_string(), "This is a test error");
    }

    #[test]
    fn test_detail_includes_cause_chain() {
        let catalog = CatalogError::new(CatalogErrorKind::Io)
            .with_path(PathBuf::from("catalog.toml"))
            .with_source(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = PageError::from(catalog);

        let detail = err.detail();

        assert!(detail.starts_with("Catalog("), "got: {detail}");
        assert!(detail.contains("caused by:"), "got: {detail}");
        assert!(detail.contains("denied"), "got: {detail}");
    }

    #[test]
    fn test_into_response_forwards_error() {
        let response = PageError::NotFound("Page Not Found".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let forwarded = response.extensions().get::<ForwardedError>().unwrap();
        assert_eq!(forwarded.0.to_string(), "Page Not Found");
    }
}
