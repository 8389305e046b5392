//! Template rendering.
//!
//! Templates are compiled into the binary. A views directory, when configured,
//! overrides individual templates by name; anything it lacks falls back to the
//! built-in copy.

use std::path::PathBuf;

use minijinja::Environment;
use serde::Serialize;

use crate::context::RequestContext;

/// Built-in templates, keyed by name.
const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("demo.html", include_str!("../templates/demo.html")),
    ("catalog/list.html", include_str!("../templates/catalog/list.html")),
    ("catalog/detail.html", include_str!("../templates/catalog/detail.html")),
    ("faculty/list.html", include_str!("../templates/faculty/list.html")),
    ("faculty/detail.html", include_str!("../templates/faculty/detail.html")),
    ("errors/404.html", include_str!("../templates/errors/404.html")),
    ("errors/500.html", include_str!("../templates/errors/500.html")),
];

/// Locals and page data merged into a single template context.
#[derive(Serialize)]
struct PageContext<'a, P> {
    #[serde(flatten)]
    locals: &'a RequestContext,
    #[serde(flatten)]
    page: P,
}

/// Template environment.
pub(crate) struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Built-in templates only.
    pub(crate) fn embedded() -> Result<Self, minijinja::Error> {
        Self::from_templates(TEMPLATES)
    }

    /// An explicit template set.
    pub(crate) fn from_templates(
        templates: &[(&'static str, &'static str)],
    ) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in templates {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Templates from `dir`, falling back to the built-in ones.
    pub(crate) fn with_overrides(dir: PathBuf) -> Result<Self, minijinja::Error> {
        if !dir.is_dir() {
            return Err(minijinja::Error::new(
                minijinja::ErrorKind::TemplateNotFound,
                format!("views directory {} does not exist", dir.display()),
            ));
        }
        tracing::debug!(dir = %dir.display(), "Using template overrides");

        let overrides = minijinja::path_loader(dir);
        let mut env = Environment::new();
        env.set_loader(move |name| {
            if let Some(source) = overrides(name)? {
                return Ok(Some(source));
            }
            Ok(builtin(name).map(str::to_owned))
        });
        Ok(Self { env })
    }

    /// Render a template with an arbitrary context.
    pub(crate) fn render<S: Serialize>(
        &self,
        name: &str,
        ctx: S,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }

    /// Render a page template with the request locals merged into `page`.
    pub(crate) fn render_page<P: Serialize>(
        &self,
        name: &str,
        locals: &RequestContext,
        page: P,
    ) -> Result<String, minijinja::Error> {
        self.render(name, PageContext { locals, page })
    }
}

fn builtin(name: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(template, _)| *template == name)
        .map(|(_, source)| *source)
}
