//! In-memory media store for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    adapters::{UPLOAD_SUBDIR, validate_upload_name, with_collision_suffix},
    domain::ImageRef,
    ports::{MediaStore, MediaStoreError, MediaStoreResult},
};

/// In-memory media store keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMediaStore {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryMediaStore {
    /// Creates an empty in-memory media store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored content for an image reference, if present.
    ///
    /// # Errors
    ///
    /// Returns [`MediaStoreError::Storage`] when the backing lock is
    /// poisoned.
    pub fn content(&self, image: &ImageRef) -> MediaStoreResult<Option<Vec<u8>>> {
        let files = self.files.read().map_err(|err| {
            MediaStoreError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(files.get(image.as_str()).cloned())
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn save(&self, file_name: &str, content: Vec<u8>) -> MediaStoreResult<ImageRef> {
        validate_upload_name(file_name)?;
        let mut files = self.files.write().map_err(|err| {
            MediaStoreError::storage(std::io::Error::other(err.to_string()))
        })?;
        let mut path = format!("{UPLOAD_SUBDIR}/{file_name}");
        while files.contains_key(&path) {
            path = format!("{UPLOAD_SUBDIR}/{}", with_collision_suffix(file_name));
        }
        let image = ImageRef::new(path.clone()).map_err(MediaStoreError::storage)?;
        files.insert(path, content);
        Ok(image)
    }
}
