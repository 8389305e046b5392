//! Per-request template locals.

use std::collections::BTreeMap;

use serde::Serialize;

/// Values computed once per request and shared with every rendered template.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub(crate) struct RequestContext {
    /// Runtime environment name, lowercased.
    pub(crate) environment: String,
    /// Four-digit local year at request time.
    pub(crate) current_year: i32,
    /// Pre-rendered greeting fragment.
    pub(crate) greeting: String,
    /// Theme class for the `<body>` element.
    pub(crate) body_class: String,
    /// Echo of the request query string.
    pub(crate) query_params: BTreeMap<String, String>,
    /// Stylesheet hrefs scoped to the request path.
    pub(crate) styles: Vec<String>,
}
