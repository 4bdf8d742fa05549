//! Orchestration services for task creation and retrieval.

mod creation;

pub use creation::{TaskCreationError, TaskCreationResult, TaskCreationService};
