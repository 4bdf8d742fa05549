//! Filesystem adapters using capability-scoped directory access.

mod media;

pub use media::FsMediaStore;
