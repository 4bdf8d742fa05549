//! Validated field newtypes for the task aggregate.

use super::TaskDomainError;
use crate::slug::{MAX_SLUG_CHARS, slugify};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum title length in characters, matching the persisted column width.
pub const MAX_TITLE_CHARS: usize = 100;

/// Validated task title, at most [`MAX_TITLE_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is blank and
    /// [`TaskDomainError::TitleTooLong`] when it exceeds the column width.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let actual = raw.chars().count();
        if actual > MAX_TITLE_CHARS {
            return Err(TaskDomainError::TitleTooLong {
                actual,
                max: MAX_TITLE_CHARS,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form task body text. Required, unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskText(String);

impl TaskText {
    /// Creates validated task text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyText`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyText);
        }
        Ok(Self(raw))
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// URL-safe task identifier, unique across all tasks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Creates a validated slug from user input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptySlug`] for blank input,
    /// [`TaskDomainError::SlugTooLong`] when the value exceeds
    /// [`MAX_SLUG_CHARS`], and [`TaskDomainError::InvalidSlug`] when it
    /// contains characters outside `[A-Za-z0-9_-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(TaskDomainError::EmptySlug);
        }
        let actual = raw.chars().count();
        if actual > MAX_SLUG_CHARS {
            return Err(TaskDomainError::SlugTooLong {
                actual,
                max: MAX_SLUG_CHARS,
            });
        }
        let valid = raw
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !valid {
            return Err(TaskDomainError::InvalidSlug(raw));
        }
        Ok(Self(raw))
    }

    /// Derives a slug from a title via transliteration and hyphenation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptySlug`] when the title contains no
    /// characters representable in a slug.
    pub fn derive(title: &Title) -> Result<Self, TaskDomainError> {
        let derived = slugify(title.as_str());
        if derived.is_empty() {
            return Err(TaskDomainError::EmptySlug);
        }
        Ok(Self(derived))
    }

    /// Returns the slug as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Relative media path referencing a stored task image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(Utf8PathBuf);

impl ImageRef {
    /// Creates a validated image reference.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidImagePath`] when the path is
    /// empty, absolute, or contains parent-directory components.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Result<Self, TaskDomainError> {
        let raw = path.into();
        let escapes_root = raw
            .components()
            .any(|component| !matches!(component, Utf8Component::Normal(_)));
        if raw.as_str().is_empty() || escapes_root {
            return Err(TaskDomainError::InvalidImagePath(raw.into_string()));
        }
        Ok(Self(raw))
    }

    /// Returns the relative path.
    #[must_use]
    pub fn as_path(&self) -> &Utf8Path {
        &self.0
    }

    /// Returns the relative path as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
