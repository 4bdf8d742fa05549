//! Route table mapping method and path onto handlers.

use crate::task::{
    forms::TaskSubmission,
    ports::{MediaStore, TaskStore},
};
use crate::web::{
    context::RequestContext,
    handlers::{HandlerResult, SiteHandlers},
    response::Response,
};
use mockable::Clock;

/// HTTP methods the route table distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
}

/// Resolved route of an incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /` — task creation form.
    Home,
    /// `POST /` — form submission.
    CreateTask,
    /// `GET /added/` — confirmation page.
    TaskAdded,
    /// `GET /task/` — task list.
    TaskList,
    /// `GET /task/<slug>/` — task detail.
    TaskDetail {
        /// Slug path parameter, still unvalidated.
        slug: String,
    },
    /// `GET /page/about/` — static about page.
    About,
}

impl Route {
    /// Resolves a method and path to a route, or `None` for unknown paths.
    #[must_use]
    pub fn resolve(method: Method, path: &str) -> Option<Self> {
        match (method, path) {
            (Method::Get, "/") => Some(Self::Home),
            (Method::Post, "/") => Some(Self::CreateTask),
            (Method::Get, "/added/") => Some(Self::TaskAdded),
            (Method::Get, "/task/") => Some(Self::TaskList),
            (Method::Get, "/page/about/") => Some(Self::About),
            (Method::Get, other) => other
                .strip_prefix("/task/")
                .and_then(|rest| rest.strip_suffix('/'))
                .filter(|slug| !slug.is_empty() && !slug.contains('/'))
                .map(|slug| Self::TaskDetail {
                    slug: slug.to_owned(),
                }),
            (Method::Post, _) => None,
        }
    }
}

/// Dispatcher over the site's route table.
pub struct Router<S, M, C>
where
    S: TaskStore,
    M: MediaStore,
    C: Clock + Send + Sync,
{
    handlers: SiteHandlers<S, M, C>,
}

impl<S, M, C> Router<S, M, C>
where
    S: TaskStore,
    M: MediaStore,
    C: Clock + Send + Sync,
{
    /// Creates a router over a handler set.
    #[must_use]
    pub const fn new(handlers: SiteHandlers<S, M, C>) -> Self {
        Self { handlers }
    }

    /// Dispatches a request to the matching handler.
    ///
    /// Unknown paths resolve to [`Response::NotFound`]. A `POST /` with no
    /// body is handled as an empty submission and fails form validation.
    ///
    /// # Errors
    ///
    /// Propagates the handler's error for store, media, or rendering
    /// failures.
    pub async fn dispatch(
        &self,
        ctx: &dyn RequestContext,
        method: Method,
        path: &str,
        submission: Option<TaskSubmission>,
    ) -> HandlerResult {
        match Route::resolve(method, path) {
            None => Ok(Response::NotFound),
            Some(Route::Home) => self.handlers.home(),
            Some(Route::CreateTask) => {
                self.handlers
                    .create_task(submission.unwrap_or_default())
                    .await
            }
            Some(Route::TaskAdded) => self.handlers.task_added(),
            Some(Route::TaskList) => self.handlers.task_list(ctx).await,
            Some(Route::TaskDetail { slug }) => self.handlers.task_detail(ctx, &slug).await,
            Some(Route::About) => self.handlers.about(),
        }
    }
}
