//! Adapter implementations of the task ports.

pub mod fs;
pub mod memory;
pub mod postgres;

mod upload_name;

pub(crate) use upload_name::{validate_upload_name, with_collision_suffix};

/// Media subdirectory for task images, relative to the media root.
pub(crate) const UPLOAD_SUBDIR: &str = "tasks";
