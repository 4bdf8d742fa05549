//! Port contracts for task persistence and media storage.

mod media;
mod store;

pub use media::{MediaStore, MediaStoreError, MediaStoreResult};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
