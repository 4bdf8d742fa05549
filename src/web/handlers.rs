//! Request handlers for the task and static-page surface.

use crate::task::{
    domain::Slug,
    forms::{FieldError, FormField, TaskSubmission},
    ports::{MediaStore, MediaStoreError, TaskStore, TaskStoreError},
    services::{TaskCreationError, TaskCreationService},
};
use crate::web::{
    context::RequestContext,
    response::Response,
    templates::{self, TemplateError, TemplateRenderer},
};
use minijinja::context;
use mockable::Clock;
use serde::Serialize;
use thiserror::Error;

/// Location of the external login endpoint guests are redirected to.
pub const LOGIN_URL: &str = "/admin/login/";

/// Location of the post-creation confirmation page.
pub const TASK_ADDED_URL: &str = "/added/";

/// Errors a handler cannot express as a page or redirect.
///
/// A duplicate-slug store error here means a concurrent submission won
/// the validation race; it is fatal to the request, not retried.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Template rendering failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),

    /// Media storage failed.
    #[error(transparent)]
    Media(#[from] MediaStoreError),

    /// Task service operation failed.
    #[error(transparent)]
    Creation(#[from] TaskCreationError),
}

/// Result type for handler invocations.
pub type HandlerResult = Result<Response, HandlerError>;

/// Handlers for the five routes of the site.
pub struct SiteHandlers<S, M, C>
where
    S: TaskStore,
    M: MediaStore,
    C: Clock + Send + Sync,
{
    tasks: TaskCreationService<S, M, C>,
    renderer: TemplateRenderer,
}

/// Submitted text values echoed back when a form re-renders with errors.
#[derive(Debug, Clone, Default)]
struct FormValues {
    title: String,
    text: String,
    slug: String,
}

impl FormValues {
    fn initial() -> Self {
        Self {
            title: FormField::Title.initial().unwrap_or_default().to_owned(),
            text: String::new(),
            slug: String::new(),
        }
    }

    fn echo(submission: &TaskSubmission) -> Self {
        Self {
            title: submission.title.clone().unwrap_or_default(),
            text: submission.text.clone().unwrap_or_default(),
            slug: submission.slug.clone().unwrap_or_default(),
        }
    }

    fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Text => &self.text,
            FormField::Slug => &self.slug,
            FormField::Image => "",
        }
    }
}

/// Per-field rendering context for the creation form.
#[derive(Debug, Serialize)]
struct FieldContext {
    name: &'static str,
    label: &'static str,
    help_text: &'static str,
    value: String,
    errors: Vec<String>,
}

fn form_fields(values: &FormValues, errors: &[FieldError]) -> Vec<FieldContext> {
    FormField::ALL
        .into_iter()
        .map(|field| FieldContext {
            name: field.name(),
            label: field.label(),
            help_text: field.help_text(),
            value: values.get(field).to_owned(),
            errors: errors
                .iter()
                .filter(|err| err.field() == field)
                .map(ToString::to_string)
                .collect(),
        })
        .collect()
}

impl<S, M, C> SiteHandlers<S, M, C>
where
    S: TaskStore,
    M: MediaStore,
    C: Clock + Send + Sync,
{
    /// Creates the handler set over a task service and template renderer.
    #[must_use]
    pub const fn new(tasks: TaskCreationService<S, M, C>, renderer: TemplateRenderer) -> Self {
        Self { tasks, renderer }
    }

    /// Renders the empty task creation form.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Template`] when rendering fails.
    pub fn home(&self) -> HandlerResult {
        self.render_form(&FormValues::initial(), &[])
    }

    /// Accepts a form submission.
    ///
    /// A valid submission persists the task and redirects to the
    /// confirmation page; an invalid one re-renders the form with
    /// field-level messages and the submitted values.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] for store, media, or rendering failures.
    pub async fn create_task(&self, submission: TaskSubmission) -> HandlerResult {
        let echoed = FormValues::echo(&submission);
        match self.tasks.create(submission).await {
            Ok(_) => Ok(Response::redirect(TASK_ADDED_URL)),
            Err(TaskCreationError::Invalid(errors)) => self.render_form(&echoed, &errors),
            Err(TaskCreationError::Store(err)) => Err(err.into()),
            Err(TaskCreationError::Media(err)) => Err(err.into()),
        }
    }

    /// Renders the post-creation confirmation page.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Template`] when rendering fails.
    pub fn task_added(&self) -> HandlerResult {
        let html = self.renderer.render(templates::TASK_ADDED, context! {})?;
        Ok(Response::page(templates::TASK_ADDED, html))
    }

    /// Lists all tasks. Guests are redirected to the login page.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] for store or rendering failures.
    pub async fn task_list(&self, ctx: &dyn RequestContext) -> HandlerResult {
        if !ctx.is_authenticated() {
            return Ok(login_redirect("/task/"));
        }
        let tasks = self.tasks.list().await?;
        let html = self
            .renderer
            .render(templates::TASK_LIST, context! { tasks => tasks })?;
        Ok(Response::page(templates::TASK_LIST, html))
    }

    /// Shows one task by slug. Guests are redirected to the login page;
    /// an unknown or malformed slug yields [`Response::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] for store or rendering failures.
    pub async fn task_detail(&self, ctx: &dyn RequestContext, raw_slug: &str) -> HandlerResult {
        if !ctx.is_authenticated() {
            return Ok(login_redirect(&format!("/task/{raw_slug}/")));
        }
        let Ok(slug) = Slug::new(raw_slug) else {
            return Ok(Response::NotFound);
        };
        let Some(task) = self.tasks.find_by_slug(&slug).await? else {
            return Ok(Response::NotFound);
        };
        let html = self
            .renderer
            .render(templates::TASK_DETAIL, context! { task => task })?;
        Ok(Response::page(templates::TASK_DETAIL, html))
    }

    /// Renders the static about page.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Template`] when rendering fails.
    pub fn about(&self) -> HandlerResult {
        let html = self.renderer.render(templates::ABOUT, context! {})?;
        Ok(Response::page(templates::ABOUT, html))
    }

    fn render_form(&self, values: &FormValues, errors: &[FieldError]) -> HandlerResult {
        let fields = form_fields(values, errors);
        let html = self
            .renderer
            .render(templates::HOME, context! { form_fields => fields })?;
        Ok(Response::page(templates::HOME, html))
    }
}

/// Builds the login redirect carrying the original path as `next`.
///
/// The path is percent-encoded so query-significant characters in it
/// cannot change the meaning of the redirect target; slashes stay
/// unencoded to keep the value readable as a path.
fn login_redirect(next: &str) -> Response {
    Response::redirect(format!("{LOGIN_URL}?next={}", percent_encode_path(next)))
}

/// Percent-encodes a path for use as a query-parameter value, leaving
/// unreserved characters and `/` as they are.
fn percent_encode_path(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    for ch in path.chars() {
        match ch {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' | '/' => encoded.push(ch),
            _ => {
                let mut buf = [0u8; 4];
                for byte in ch.encode_utf8(&mut buf).bytes() {
                    encoded.push_str(&format!("%{byte:02X}"));
                }
            }
        }
    }
    encoded
}
