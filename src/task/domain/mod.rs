//! Domain model for task records.
//!
//! The domain models validated task fields, the task aggregate, and the
//! slug derivation contract while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod fields;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use fields::{ImageRef, MAX_TITLE_CHARS, Slug, TaskText, Title};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task};
