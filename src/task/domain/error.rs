//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The title exceeds the persisted column width.
    #[error("task title has {actual} characters, at most {max} allowed")]
    TitleTooLong {
        /// Number of characters in the rejected title.
        actual: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyText,

    /// The slug contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid slug '{0}', use only Latin letters, numbers, hyphens and underscores")]
    InvalidSlug(String),

    /// The slug exceeds the persisted column width.
    #[error("slug has {actual} characters, at most {max} allowed")]
    SlugTooLong {
        /// Number of characters in the rejected slug.
        actual: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// Slug derivation produced no usable characters.
    #[error("title does not derive a usable slug")]
    EmptySlug,

    /// The image reference is empty, absolute, or escapes the media root.
    #[error("invalid image path '{0}', expected a relative path inside the media root")]
    InvalidImagePath(String),
}
