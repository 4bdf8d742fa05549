//! Template registry and renderer backed by `minijinja`.
//!
//! Templates are embedded at compile time and registered under the same
//! names the handlers report on their rendered pages.

use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

/// Template for the task creation form.
pub const HOME: &str = "tasks/home.html";
/// Template for the post-creation confirmation page.
pub const TASK_ADDED: &str = "tasks/added.html";
/// Template for the task list.
pub const TASK_LIST: &str = "tasks/task_list.html";
/// Template for the task detail page.
pub const TASK_DETAIL: &str = "tasks/task_detail.html";
/// Template for the static about page.
pub const ABOUT: &str = "static_pages/about.html";

const TEMPLATE_SOURCES: [(&str, &str); 5] = [
    (HOME, include_str!("../../templates/tasks/home.html")),
    (TASK_ADDED, include_str!("../../templates/tasks/added.html")),
    (TASK_LIST, include_str!("../../templates/tasks/task_list.html")),
    (
        TASK_DETAIL,
        include_str!("../../templates/tasks/task_detail.html"),
    ),
    (ABOUT, include_str!("../../templates/static_pages/about.html")),
];

/// Template loading or rendering failure.
#[derive(Debug, Error)]
#[error("template '{template}' failed: {reason}")]
pub struct TemplateError {
    /// Name of the template involved.
    pub template: String,
    /// Renderer-reported reason.
    pub reason: String,
}

impl TemplateError {
    fn new(template: &str, error: &minijinja::Error) -> Self {
        Self {
            template: template.to_owned(),
            reason: error.to_string(),
        }
    }
}

/// Renderer over the embedded template set.
#[derive(Debug)]
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Creates a renderer with all embedded templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when an embedded template fails to parse.
    pub fn new() -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATE_SOURCES {
            env.add_template(name, source)
                .map_err(|error| TemplateError::new(name, &error))?;
        }
        Ok(Self { env })
    }

    /// Renders a registered template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when the template is unknown or rendering
    /// fails.
    pub fn render(&self, name: &str, context: impl Serialize) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|error| TemplateError::new(name, &error))?;
        template
            .render(context)
            .map_err(|error| TemplateError::new(name, &error))
    }
}
