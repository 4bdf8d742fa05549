//! Request context capability for the authenticated-user check.

/// Per-request capability exposing the session's authenticated user.
///
/// Session handling itself lives in the hosting infrastructure; handlers
/// only ever ask who, if anyone, is signed in.
pub trait RequestContext: Send + Sync {
    /// Returns the authenticated user name, or `None` for a guest.
    #[must_use]
    fn authenticated_user(&self) -> Option<&str>;

    /// Reports whether the request carries an authenticated session.
    #[must_use]
    fn is_authenticated(&self) -> bool {
        self.authenticated_user().is_some()
    }
}

/// Simple session-backed request context.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    user: Option<String>,
}

impl SessionContext {
    /// Creates a guest context with no signed-in user.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user: None }
    }

    /// Creates a context for a signed-in user.
    #[must_use]
    pub fn authenticated(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
        }
    }
}

impl RequestContext for SessionContext {
    fn authenticated_user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}
