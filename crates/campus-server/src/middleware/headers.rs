//! Response header middleware.
//!
//! Adds security headers to all responses:
//! - Content-Security-Policy
//! - X-Content-Type-Options
//! - X-Frame-Options
//!
//! The demo page additionally carries its own route-scoped headers.

use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower::ServiceBuilder;
use tower::layer::util::{Identity, Stack};
use tower_http::set_header::SetResponseHeaderLayer;

/// Content-Security-Policy header value.
const CSP: &str = "default-src 'self'; \
                   style-src 'self' 'unsafe-inline'; \
                   img-src 'self' data:; \
                   frame-ancestors 'none'";

/// Route-scoped headers set on the demo page only.
const DEMO_HEADERS: [(&str, &str); 2] = [
    ("x-demo-page", "true"),
    ("x-middleware-demo", "Route-specific middleware is working"),
];

type HeaderLayer = SetResponseHeaderLayer<HeaderValue>;
type Headers2 = Stack<HeaderLayer, Stack<HeaderLayer, Identity>>;
type Headers3 = Stack<HeaderLayer, Headers2>;

/// Security headers applied to every response.
pub(crate) fn security_headers() -> ServiceBuilder<Headers3> {
    ServiceBuilder::new()
        .layer(csp_layer())
        .layer(content_type_options_layer())
        .layer(frame_options_layer())
}

/// Headers for the demo route.
pub(crate) fn demo_headers() -> ServiceBuilder<Headers2> {
    let [(page_name, page_value), (demo_name, demo_value)] = DEMO_HEADERS;
    ServiceBuilder::new()
        .layer(overriding(page_name, page_value))
        .layer(overriding(demo_name, demo_value))
}

/// Create layer that adds Content-Security-Policy header.
fn csp_layer() -> HeaderLayer {
    overriding("content-security-policy", CSP)
}

/// Create layer that adds X-Content-Type-Options header.
fn content_type_options_layer() -> HeaderLayer {
    overriding("x-content-type-options", "nosniff")
}

/// Create layer that adds X-Frame-Options header.
fn frame_options_layer() -> HeaderLayer {
    overriding("x-frame-options", "DENY")
}

fn overriding(name: &'static str, value: &'static str) -> HeaderLayer {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
    )
}
