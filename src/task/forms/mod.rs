//! Task creation form: field metadata, submission payload, and cleaning
//! rules.
//!
//! The form mirrors the persisted task fields. Cleaning is split in two:
//! the pure per-field rules in [`rules`] run without storage access, and
//! the slug-uniqueness check runs in the creation service against the
//! task store.

mod rules;

pub use rules::{CleanSubmission, clean};

use crate::task::domain::{Slug, TaskDomainError};
use thiserror::Error;

/// Initial value shown for the title field and substituted when the
/// submitted title is blank.
pub const TITLE_INITIAL: &str = "Untitled task";

/// Form fields of the task creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Task title.
    Title,
    /// Task body text.
    Text,
    /// URL slug.
    Slug,
    /// Uploaded image.
    Image,
}

impl FormField {
    /// All form fields in display order.
    pub const ALL: [Self; 4] = [Self::Title, Self::Text, Self::Slug, Self::Image];

    /// Returns the wire name of the field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Text => "text",
            Self::Slug => "slug",
            Self::Image => "image",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Text => "Text",
            Self::Slug => "URL slug for the task page",
            Self::Image => "Image",
        }
    }

    /// Returns the help text rendered next to the field.
    #[must_use]
    pub const fn help_text(self) -> &'static str {
        match self {
            Self::Title => "Enter the task name",
            Self::Text => "Enter the task description",
            Self::Slug => {
                "Enter a unique URL for the task page. Use only Latin \
                 characters, numbers, hyphens and underscores"
            }
            Self::Image => "Upload an image",
        }
    }

    /// Returns the initial value rendered on an empty form, if any.
    #[must_use]
    pub const fn initial(self) -> Option<&'static str> {
        match self {
            Self::Title => Some(TITLE_INITIAL),
            Self::Text | Self::Slug | Self::Image => None,
        }
    }
}

/// Uploaded image payload attached to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Client-supplied file name.
    pub file_name: String,
    /// Raw file content.
    pub content: Vec<u8>,
}

impl UploadedImage {
    /// Creates an upload payload.
    #[must_use]
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Raw task creation submission, before cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSubmission {
    /// Submitted title, if any.
    pub title: Option<String>,
    /// Submitted body text, if any.
    pub text: Option<String>,
    /// Submitted slug, if any.
    pub slug: Option<String>,
    /// Uploaded image, if any.
    pub image: Option<UploadedImage>,
}

impl TaskSubmission {
    /// Creates an empty submission.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            text: None,
            slug: None,
            image: None,
        }
    }

    /// Sets the submitted title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the submitted body text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the submitted slug.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Attaches an uploaded image.
    #[must_use]
    pub fn with_image(mut self, image: UploadedImage) -> Self {
        self.image = Some(image);
        self
    }
}

/// Field-level validation errors, rendered next to the offending field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    /// The title was blank and no default could be applied.
    #[error("This field is required.")]
    MissingTitle,

    /// The title exceeds the column width.
    #[error("Ensure this value has at most {max} characters (it has {actual}).")]
    TitleTooLong {
        /// Number of characters submitted.
        actual: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The body text was blank.
    #[error("This field is required.")]
    MissingText,

    /// The slug contains characters outside `[A-Za-z0-9_-]`.
    #[error("'{0}' is not a valid slug. Use only Latin letters, numbers, hyphens and underscores.")]
    InvalidSlug(String),

    /// The slug exceeds the column width.
    #[error("Ensure this value has at most {max} characters (it has {actual}).")]
    SlugTooLong {
        /// Number of characters submitted.
        actual: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// Neither a slug was supplied nor could one be derived.
    #[error("The title does not produce a usable slug, enter one explicitly.")]
    EmptySlug,

    /// A task with the candidate slug already exists.
    #[error("Slug \"{0}\" already exists, enter a unique value")]
    DuplicateSlug(Slug),

    /// The uploaded file name is empty or not a bare name.
    #[error("Upload a valid image file name, '{0}' is not usable.")]
    InvalidImage(String),
}

impl FieldError {
    /// Returns the form field the error is attributed to.
    #[must_use]
    pub const fn field(&self) -> FormField {
        match self {
            Self::MissingTitle | Self::TitleTooLong { .. } => FormField::Title,
            Self::MissingText => FormField::Text,
            Self::InvalidSlug(_)
            | Self::SlugTooLong { .. }
            | Self::EmptySlug
            | Self::DuplicateSlug(_) => FormField::Slug,
            Self::InvalidImage(_) => FormField::Image,
        }
    }
}

impl From<TaskDomainError> for FieldError {
    fn from(err: TaskDomainError) -> Self {
        match err {
            TaskDomainError::EmptyTitle => Self::MissingTitle,
            TaskDomainError::TitleTooLong { actual, max } => Self::TitleTooLong { actual, max },
            TaskDomainError::EmptyText => Self::MissingText,
            TaskDomainError::InvalidSlug(value) => Self::InvalidSlug(value),
            TaskDomainError::SlugTooLong { actual, max } => Self::SlugTooLong { actual, max },
            TaskDomainError::EmptySlug => Self::EmptySlug,
            TaskDomainError::InvalidImagePath(path) => Self::InvalidImage(path),
        }
    }
}
