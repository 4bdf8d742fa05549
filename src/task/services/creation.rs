//! Service layer for task creation, listing, and slug lookup.

use crate::task::{
    domain::{ImageRef, Slug, Task},
    forms::{self, FieldError, TaskSubmission, UploadedImage},
    ports::{MediaStore, MediaStoreError, TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task creation and retrieval.
#[derive(Debug, Error)]
pub enum TaskCreationError {
    /// Form validation failed; the submission created no record.
    #[error("task submission rejected with {} field error(s)", .0.len())]
    Invalid(Vec<FieldError>),

    /// Store operation failed. A [`TaskStoreError::DuplicateSlug`] here
    /// means a concurrent submission won the check-then-insert race; the
    /// request is not retried.
    #[error(transparent)]
    Store(#[from] TaskStoreError),

    /// Media storage failed.
    #[error(transparent)]
    Media(#[from] MediaStoreError),
}

/// Result type for task creation service operations.
pub type TaskCreationResult<T> = Result<T, TaskCreationError>;

/// Task creation and retrieval orchestration service.
#[derive(Clone)]
pub struct TaskCreationService<S, M, C>
where
    S: TaskStore,
    M: MediaStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    media: Arc<M>,
    clock: Arc<C>,
}

impl<S, M, C> TaskCreationService<S, M, C>
where
    S: TaskStore,
    M: MediaStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task creation service.
    #[must_use]
    pub const fn new(store: Arc<S>, media: Arc<M>, clock: Arc<C>) -> Self {
        Self { store, media, clock }
    }

    /// Validates a submission and persists the resulting task.
    ///
    /// The candidate slug (supplied, or derived from the title) is checked
    /// against the store before insert. The check and the insert are not
    /// atomic; the store's own uniqueness constraint covers the window in
    /// between and a loss there surfaces as [`TaskCreationError::Store`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError::Invalid`] when field cleaning or the
    /// uniqueness check fails, in which case no record is created.
    pub async fn create(&self, submission: TaskSubmission) -> TaskCreationResult<Task> {
        let clean = forms::clean(submission).map_err(TaskCreationError::Invalid)?;

        if self.store.slug_exists(&clean.slug).await? {
            return Err(TaskCreationError::Invalid(vec![FieldError::DuplicateSlug(
                clean.slug,
            )]));
        }

        let mut image = None;
        if let Some(upload) = clean.image {
            image = Some(self.save_image(upload).await?);
        }

        let task = Task::new(clean.title, clean.text, clean.slug, image, &*self.clock);
        self.store.insert(&task).await?;
        Ok(task)
    }

    /// Returns all tasks in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError::Store`] when the lookup fails.
    pub async fn list(&self) -> TaskCreationResult<Vec<Task>> {
        Ok(self.store.list().await?)
    }

    /// Finds a task by exact slug match.
    ///
    /// Returns `Ok(None)` when no task carries the slug.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError::Store`] when the lookup fails.
    pub async fn find_by_slug(&self, slug: &Slug) -> TaskCreationResult<Option<Task>> {
        Ok(self.store.find_by_slug(slug).await?)
    }

    /// Persists an upload, mapping a rejected file name to a field error.
    async fn save_image(&self, upload: UploadedImage) -> TaskCreationResult<ImageRef> {
        self.media
            .save(&upload.file_name, upload.content)
            .await
            .map_err(|err| match err {
                MediaStoreError::InvalidFileName(name) => {
                    TaskCreationError::Invalid(vec![FieldError::InvalidImage(name)])
                }
                storage @ MediaStoreError::Storage(_) => TaskCreationError::Media(storage),
            })
    }
}
