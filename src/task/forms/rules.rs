//! Pure field-cleaning rules for the task creation form.
//!
//! Rules run without storage access and collect every field error rather
//! than stopping at the first, so the form can report all problems in one
//! round trip. Slug uniqueness is checked separately by the creation
//! service.

use super::{FieldError, TITLE_INITIAL, TaskSubmission, UploadedImage};
use crate::task::domain::{Slug, TaskText, Title};

/// Submission after field cleaning, ready for the uniqueness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSubmission {
    /// Cleaned title, defaulted when the submission was blank.
    pub title: Title,
    /// Cleaned body text.
    pub text: TaskText,
    /// Candidate slug, supplied or derived from the title.
    pub slug: Slug,
    /// Uploaded image passed through untouched.
    pub image: Option<UploadedImage>,
}

/// Cleans a raw submission into validated fields.
///
/// # Errors
///
/// Returns every field error found; no field is reported twice.
pub fn clean(submission: TaskSubmission) -> Result<CleanSubmission, Vec<FieldError>> {
    let TaskSubmission {
        title,
        text,
        slug,
        image,
    } = submission;
    let mut errors: Vec<FieldError> = Vec::new();

    let cleaned_title = record(clean_title(title), &mut errors);
    let cleaned_text = record(clean_text(text), &mut errors);
    let cleaned_slug = clean_slug(slug, cleaned_title.as_ref())
        .and_then(|result| record(result, &mut errors));

    if let (Some(title_value), Some(text_value), Some(slug_value)) =
        (cleaned_title, cleaned_text, cleaned_slug)
        && errors.is_empty()
    {
        return Ok(CleanSubmission {
            title: title_value,
            text: text_value,
            slug: slug_value,
            image,
        });
    }
    Err(errors)
}

fn record<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    result.map_err(|err| errors.push(err)).ok()
}

/// Applies the title default, then validates the value.
fn clean_title(raw: Option<String>) -> Result<Title, FieldError> {
    let value = raw
        .filter(|submitted| !submitted.trim().is_empty())
        .unwrap_or_else(|| TITLE_INITIAL.to_owned());
    Title::new(value).map_err(FieldError::from)
}

/// Requires a non-blank body text.
fn clean_text(raw: Option<String>) -> Result<TaskText, FieldError> {
    TaskText::new(raw.unwrap_or_default()).map_err(FieldError::from)
}

/// Validates a supplied slug, or derives one from the cleaned title.
///
/// Surrounding whitespace on a supplied slug is trimmed away before
/// validation. Returns `None` when the slug was blank and the title
/// itself failed cleaning; the title error already covers that case.
fn clean_slug(raw: Option<String>, title: Option<&Title>) -> Option<Result<Slug, FieldError>> {
    let supplied = raw
        .map(|submitted| submitted.trim().to_owned())
        .filter(|submitted| !submitted.is_empty());
    match (supplied, title) {
        (Some(value), _) => Some(Slug::new(value).map_err(FieldError::from)),
        (None, Some(cleaned)) => Some(Slug::derive(cleaned).map_err(FieldError::from)),
        (None, None) => None,
    }
}
