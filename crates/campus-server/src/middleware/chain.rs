//! Request context chain.
//!
//! An ordered list of named steps run once per request before route dispatch.
//! Each step writes its fields into the [`RequestContext`] or short-circuits
//! with a response of its own. The finished context is attached to the request
//! extensions, where handlers and the error pipeline read it.

use std::collections::BTreeMap;
use std::ops::ControlFlow;
use std::sync::Arc;

use axum::extract::{Query, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use campus_config::StyleRule;
use chrono::{Datelike, NaiveDateTime, Timelike};
use rand::RngExt;

use crate::context::RequestContext;
use crate::state::AppState;

/// Paths starting with this prefix are never logged.
const RESERVED_PREFIX: &str = "/.";

/// A single step of the context chain.
pub(crate) trait ContextStep: Send + Sync {
    /// Stable step name, used in logs.
    fn name(&self) -> &'static str;

    /// Write this step's fields, or break with a response that ends the request.
    fn apply(&self, req: &Request, ctx: &mut RequestContext) -> ControlFlow<Response>;
}

/// Source of the current local time.
pub(crate) trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the server's local time zone.
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Chooses one theme out of `count`.
pub(crate) trait ThemePicker: Send + Sync {
    /// Index in `0..count`. Only called with `count > 0`.
    fn pick(&self, count: usize) -> usize;
}

/// Uniformly random theme choice.
pub(crate) struct RandomThemePicker;

impl ThemePicker for RandomThemePicker {
    fn pick(&self, count: usize) -> usize {
        rand::rng().random_range(0..count)
    }
}

/// Settings for the standard chain.
#[derive(Clone, Debug)]
pub(crate) struct ChainSettings {
    pub(crate) environment: String,
    pub(crate) themes: Vec<String>,
    pub(crate) styles: Vec<StyleRule>,
}

/// Ordered list of context steps.
#[derive(Default)]
pub(crate) struct ContextChain {
    steps: Vec<Box<dyn ContextStep>>,
}

impl ContextChain {
    /// Create an empty chain.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    #[must_use]
    pub(crate) fn with_step(mut self, step: impl ContextStep + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// The site's chain: logger, environment, year, greeting, theme, query echo, styles.
    pub(crate) fn standard(
        settings: ChainSettings,
        clock: Arc<dyn Clock>,
        picker: Arc<dyn ThemePicker>,
    ) -> Self {
        Self::new()
            .with_step(RequestLogger)
            .with_step(Environment(settings.environment))
            .with_step(CurrentYear(Arc::clone(&clock)))
            .with_step(Greeting(clock))
            .with_step(Theme {
                themes: settings.themes,
                picker,
            })
            .with_step(QueryEcho)
            .with_step(RouteStyles(settings.styles))
    }

    /// Step names in execution order.
    pub(crate) fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Run every step against a fresh context.
    pub(crate) fn run(&self, req: &Request) -> ControlFlow<Response, RequestContext> {
        let mut ctx = RequestContext::default();
        for step in &self.steps {
            if let ControlFlow::Break(response) = step.apply(req, &mut ctx) {
                tracing::debug!(step = step.name(), "Context chain stopped early");
                return ControlFlow::Break(response);
            }
        }
        ControlFlow::Continue(ctx)
    }
}

/// Middleware that runs the chain and attaches the context to the request.
pub(crate) async fn attach_context(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    match state.chain.run(&req) {
        ControlFlow::Continue(ctx) => {
            req.extensions_mut().insert(ctx);
            next.run(req).await
        }
        ControlFlow::Break(response) => response,
    }
}

/// Greeting for a local hour of day.
pub(crate) fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..12 => "Good morning",
        12..18 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Whether a request path is logged.
pub(crate) fn should_log(path: &str) -> bool {
    !path.starts_with(RESERVED_PREFIX)
}

/// Whether a style rule prefix covers `path` on a segment boundary.
pub(crate) fn prefix_matches(prefix: &str, path: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return true;
    }
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

struct RequestLogger;

impl ContextStep for RequestLogger {
    fn name(&self) -> &'static str {
        "request-logger"
    }

    fn apply(&self, req: &Request, _ctx: &mut RequestContext) -> ControlFlow<Response> {
        if should_log(req.uri().path()) {
            tracing::info!(method = %req.method(), uri = %req.uri(), "Request");
        }
        ControlFlow::Continue(())
    }
}

struct Environment(String);

impl ContextStep for Environment {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn apply(&self, _req: &Request, ctx: &mut RequestContext) -> ControlFlow<Response> {
        ctx.environment.clone_from(&self.0);
        ControlFlow::Continue(())
    }
}

struct CurrentYear(Arc<dyn Clock>);

impl ContextStep for CurrentYear {
    fn name(&self) -> &'static str {
        "current-year"
    }

    fn apply(&self, _req: &Request, ctx: &mut RequestContext) -> ControlFlow<Response> {
        ctx.current_year = self.0.now().year();
        ControlFlow::Continue(())
    }
}

struct Greeting(Arc<dyn Clock>);

impl ContextStep for Greeting {
    fn name(&self) -> &'static str {
        "greeting"
    }

    fn apply(&self, _req: &Request, ctx: &mut RequestContext) -> ControlFlow<Response> {
        let message = greeting_for_hour(self.0.now().hour());
        ctx.greeting = format!("<p>{message}!</p>");
        ControlFlow::Continue(())
    }
}

struct Theme {
    themes: Vec<String>,
    picker: Arc<dyn ThemePicker>,
}

impl ContextStep for Theme {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn apply(&self, _req: &Request, ctx: &mut RequestContext) -> ControlFlow<Response> {
        if !self.themes.is_empty() {
            let index = self.picker.pick(self.themes.len()) % self.themes.len();
            ctx.body_class.clone_from(&self.themes[index]);
        }
        ControlFlow::Continue(())
    }
}

struct QueryEcho;

impl ContextStep for QueryEcho {
    fn name(&self) -> &'static str {
        "query-params"
    }

    fn apply(&self, req: &Request, ctx: &mut RequestContext) -> ControlFlow<Response> {
        ctx.query_params = Query::<BTreeMap<String, String>>::try_from_uri(req.uri())
            .map(|Query(params)| params)
            .unwrap_or_default();
        ControlFlow::Continue(())
    }
}

struct RouteStyles(Vec<StyleRule>);

impl ContextStep for RouteStyles {
    fn name(&self) -> &'static str {
        "route-styles"
    }

    fn apply(&self, req: &Request, ctx: &mut RequestContext) -> ControlFlow<Response> {
        let path = req.uri().path();
        ctx.styles.extend(
            self.0
                .iter()
                .filter(|rule| prefix_matches(&rule.prefix, path))
                .map(|rule| rule.href.clone()),
        );
        ControlFlow::Continue(())
    }
}
