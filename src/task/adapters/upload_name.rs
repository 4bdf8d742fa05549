//! Upload file-name validation and collision handling shared by media
//! store adapters.

use crate::task::ports::MediaStoreError;
use uuid::Uuid;

/// Number of random characters appended to a colliding file stem.
const SUFFIX_CHARS: usize = 7;

/// Rejects upload names that are empty or carry path components.
///
/// The client-supplied name must be a bare file name; separators and
/// parent references would let an upload escape the media subdirectory.
pub(crate) fn validate_upload_name(file_name: &str) -> Result<(), MediaStoreError> {
    let is_bare = !file_name.is_empty()
        && file_name != "."
        && file_name != ".."
        && !file_name.contains(['/', '\\']);
    if is_bare {
        Ok(())
    } else {
        Err(MediaStoreError::InvalidFileName(file_name.to_owned()))
    }
}

/// Returns the file name with a short random suffix inserted before the
/// extension, used when the original name is already taken.
pub(crate) fn with_collision_suffix(file_name: &str) -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(SUFFIX_CHARS)
        .collect();
    file_name.rsplit_once('.').map_or_else(
        || format!("{file_name}_{suffix}"),
        |(stem, extension)| format!("{stem}_{suffix}.{extension}"),
    )
}
