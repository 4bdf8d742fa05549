//! Media store port for uploaded task images.

use crate::task::domain::ImageRef;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for media store operations.
pub type MediaStoreResult<T> = Result<T, MediaStoreError>;

/// Storage contract for uploaded images.
///
/// Implementations place files beneath a fixed `tasks/` subdirectory of
/// the media root and return the relative path as the stored reference.
/// A name collision is resolved by the implementation, never surfaced to
/// the caller.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Stores uploaded content under the client-supplied file name.
    ///
    /// # Errors
    ///
    /// Returns [`MediaStoreError::InvalidFileName`] when the name is empty
    /// or contains path components, and [`MediaStoreError::Storage`] when
    /// the backing storage fails.
    async fn save(&self, file_name: &str, content: Vec<u8>) -> MediaStoreResult<ImageRef>;
}

/// Errors returned by media store implementations.
#[derive(Debug, Clone, Error)]
pub enum MediaStoreError {
    /// The client-supplied file name is empty or not a bare name.
    #[error("invalid upload file name: '{0}'")]
    InvalidFileName(String),

    /// Storage-layer failure.
    #[error("media storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl MediaStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
