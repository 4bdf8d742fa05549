//! Thread-safe in-memory task store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Slug, Task},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Tasks are kept in insertion order; the slug index doubles as the
/// uniqueness constraint, so a duplicate insert fails under the same
/// write lock that publishes the record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    slug_index: HashMap<String, usize>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let key = task.slug().as_str().to_owned();
        if state.slug_index.contains_key(&key) {
            return Err(TaskStoreError::DuplicateSlug(task.slug().clone()));
        }
        let position = state.tasks.len();
        state.tasks.push(task.clone());
        state.slug_index.insert(key, position);
        Ok(())
    }

    async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.clone())
    }

    async fn find_by_slug(&self, slug: &Slug) -> TaskStoreResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let task = state
            .slug_index
            .get(slug.as_str())
            .and_then(|position| state.tasks.get(*position))
            .cloned();
        Ok(task)
    }

    async fn slug_exists(&self, slug: &Slug) -> TaskStoreResult<bool> {
        let state = self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.slug_index.contains_key(slug.as_str()))
    }
}
