//! Request and response middleware.

pub(crate) mod chain;
pub(crate) mod error_page;
pub(crate) mod headers;
