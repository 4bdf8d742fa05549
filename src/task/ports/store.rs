//! Store port for task persistence and slug lookup.

use crate::task::domain::{Slug, Task};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// Slug uniqueness is enforced by every implementation at insert time. The
/// pre-insert [`TaskStore::slug_exists`] check exists for semantic error
/// reporting; in the window between check and insert a concurrent
/// submission may still win, in which case [`TaskStore::insert`] returns
/// [`TaskStoreError::DuplicateSlug`].
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateSlug`] when a task with the same
    /// slug already exists.
    async fn insert(&self, task: &Task) -> TaskStoreResult<()>;

    /// Returns all tasks in insertion order.
    async fn list(&self) -> TaskStoreResult<Vec<Task>>;

    /// Finds a task by exact slug match.
    ///
    /// Returns `None` when no task carries the slug.
    async fn find_by_slug(&self, slug: &Slug) -> TaskStoreResult<Option<Task>>;

    /// Reports whether any stored task carries the slug.
    async fn slug_exists(&self, slug: &Slug) -> TaskStoreResult<bool>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A task with the same slug already exists.
    #[error("duplicate slug: {0}")]
    DuplicateSlug(Slug),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
