//! Media store writing uploads beneath a capability-scoped media root.

use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::task::{
    adapters::{UPLOAD_SUBDIR, validate_upload_name, with_collision_suffix},
    domain::ImageRef,
    ports::{MediaStore, MediaStoreError, MediaStoreResult},
};

/// Media store backed by a directory handle.
///
/// Uploads land in the `tasks/` subdirectory of the media root; the root
/// handle is the only filesystem capability the adapter holds, so a
/// hostile file name cannot reach outside it even if validation were
/// bypassed.
#[derive(Debug)]
pub struct FsMediaStore {
    media_root: Dir,
}

impl FsMediaStore {
    /// Creates a media store over an already-opened media root, creating
    /// the upload subdirectory when missing.
    ///
    /// # Errors
    ///
    /// Returns [`MediaStoreError::Storage`] when the subdirectory cannot
    /// be created.
    pub fn new(media_root: Dir) -> MediaStoreResult<Self> {
        media_root
            .create_dir_all(UPLOAD_SUBDIR)
            .map_err(MediaStoreError::storage)?;
        Ok(Self { media_root })
    }

    /// Opens the media root from an ambient path and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`MediaStoreError::Storage`] when the path cannot be opened
    /// as a directory.
    pub fn open_ambient(media_root_path: &str) -> MediaStoreResult<Self> {
        let media_root = Dir::open_ambient_dir(media_root_path, ambient_authority())
            .map_err(MediaStoreError::storage)?;
        Self::new(media_root)
    }
}

#[async_trait]
impl MediaStore for FsMediaStore {
    async fn save(&self, file_name: &str, content: Vec<u8>) -> MediaStoreResult<ImageRef> {
        validate_upload_name(file_name)?;
        let root = self.media_root.try_clone().map_err(MediaStoreError::storage)?;
        let requested = file_name.to_owned();
        tokio::task::spawn_blocking(move || {
            let uploads = root
                .open_dir(UPLOAD_SUBDIR)
                .map_err(MediaStoreError::storage)?;
            let mut name = requested.clone();
            while uploads.exists(&name) {
                name = with_collision_suffix(&requested);
            }
            uploads
                .write(&name, &content)
                .map_err(MediaStoreError::storage)?;
            ImageRef::new(format!("{UPLOAD_SUBDIR}/{name}")).map_err(MediaStoreError::storage)
        })
        .await
        .map_err(MediaStoreError::storage)?
    }
}
