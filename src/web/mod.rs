//! Web surface: request context, responses, templates, handlers, routing.
//!
//! The hosting HTTP server, session middleware, and login endpoint are
//! external collaborators. This module exposes them as thin seams: the
//! [`context::RequestContext`] capability answers the authenticated-user
//! check, handlers produce [`response::Response`] values, and the
//! [`router::Router`] maps method and path onto handlers.

pub mod context;
pub mod handlers;
pub mod response;
pub mod router;
pub mod templates;

#[cfg(test)]
mod tests;
