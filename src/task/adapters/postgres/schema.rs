//! Diesel schema for task persistence.
//!
//! The migration additionally declares a unique index on `slug`; that
//! index is the last line of defence against concurrent submissions of
//! the same slug.

diesel::table! {
    /// Task records keyed by UUID.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 100]
        title -> Varchar,
        /// Free-form body text.
        text -> Text,
        /// Unique URL slug.
        #[max_length = 100]
        slug -> Varchar,
        /// Optional relative media path of an uploaded image.
        image -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
