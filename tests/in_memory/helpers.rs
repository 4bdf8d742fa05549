//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tablero::task::{
    adapters::memory::{InMemoryMediaStore, InMemoryTaskStore},
    forms::TaskSubmission,
    services::TaskCreationService,
};
use tablero::web::{
    handlers::SiteHandlers, response::Response, router::Router, templates::TemplateRenderer,
};

/// Router type used by every in-memory test.
pub type TestRouter = Router<InMemoryTaskStore, InMemoryMediaStore, DefaultClock>;

/// A wired-up router plus handles on its backing stores.
pub struct Harness {
    /// The dispatcher under test.
    pub router: TestRouter,
    /// Store handle for direct record assertions.
    pub store: Arc<InMemoryTaskStore>,
    /// Media handle for direct upload assertions.
    pub media: Arc<InMemoryMediaStore>,
}

/// Provides a fresh harness for each test.
#[fixture]
pub fn harness() -> Harness {
    let store = Arc::new(InMemoryTaskStore::new());
    let media = Arc::new(InMemoryMediaStore::new());
    let service = TaskCreationService::new(
        Arc::clone(&store),
        Arc::clone(&media),
        Arc::new(DefaultClock),
    );
    let renderer = TemplateRenderer::new().expect("embedded templates parse");
    Harness {
        router: Router::new(SiteHandlers::new(service, renderer)),
        store,
        media,
    }
}

/// Builds a submission with the given title and text.
pub fn submission(title: &str, text: &str) -> TaskSubmission {
    TaskSubmission::new().with_title(title).with_text(text)
}

/// Asserts the response is a redirect and returns its location.
///
/// # Panics
///
/// Panics when the response is not a redirect.
pub fn redirect_location(response: &Response) -> &str {
    response
        .location()
        .unwrap_or_else(|| panic!("expected a redirect, got {response:?}"))
}
