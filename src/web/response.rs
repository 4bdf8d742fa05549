//! Handler response values.

/// Outcome of a dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A rendered page, served with a success status.
    Page(RenderedPage),
    /// A redirect to another location.
    Redirect {
        /// Target location of the redirect.
        location: String,
    },
    /// The requested resource does not exist.
    NotFound,
}

/// A page rendered from a named template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    template: &'static str,
    html: String,
}

impl RenderedPage {
    /// Returns the template name the page was rendered from.
    #[must_use]
    pub const fn template(&self) -> &'static str {
        self.template
    }

    /// Returns the rendered HTML.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }
}

impl Response {
    /// Creates a rendered-page response.
    #[must_use]
    pub const fn page(template: &'static str, html: String) -> Self {
        Self::Page(RenderedPage { template, html })
    }

    /// Creates a redirect response.
    #[must_use]
    pub fn redirect(location: impl Into<String>) -> Self {
        Self::Redirect {
            location: location.into(),
        }
    }

    /// Returns the HTTP status code the hosting server should emit.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Page(_) => 200,
            Self::Redirect { .. } => 302,
            Self::NotFound => 404,
        }
    }

    /// Returns the rendered page, if this is a page response.
    #[must_use]
    pub const fn as_page(&self) -> Option<&RenderedPage> {
        match self {
            Self::Page(page) => Some(page),
            Self::Redirect { .. } | Self::NotFound => None,
        }
    }

    /// Returns the redirect target, if this is a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Redirect { location } => Some(location),
            Self::Page(_) | Self::NotFound => None,
        }
    }
}
