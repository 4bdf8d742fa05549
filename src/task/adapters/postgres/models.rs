//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Free-form body text.
    pub text: String,
    /// Unique URL slug.
    pub slug: String,
    /// Optional relative media path of an uploaded image.
    pub image: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Free-form body text.
    pub text: String,
    /// Unique URL slug.
    pub slug: String,
    /// Optional relative media path of an uploaded image.
    pub image: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
