//! In-memory adapters for tests and single-process use.

mod media;
mod store;

pub use media::InMemoryMediaStore;
pub use store::InMemoryTaskStore;
