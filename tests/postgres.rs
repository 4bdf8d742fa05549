//! `PostgreSQL` store tests over an externally provisioned database.
//!
//! The suite runs only when `DATABASE_URL` points at a reachable
//! `PostgreSQL` instance; without it every test returns early. Each test
//! works on its own uniquely-slugged rows, so suites can share a
//! database without interfering.

use chrono::{DateTime, TimeZone, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use rstest::rstest;
use tablero::task::adapters::postgres::PostgresTaskStore;
use tablero::task::domain::{ImageRef, PersistedTaskData, Slug, Task, TaskId, TaskText, Title};
use tablero::task::ports::{TaskStore, TaskStoreError};
use uuid::Uuid;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id UUID PRIMARY KEY,
    title VARCHAR(100) NOT NULL,
    text TEXT NOT NULL,
    slug VARCHAR(100) NOT NULL,
    image VARCHAR,
    created_at TIMESTAMPTZ NOT NULL
)";

const CREATE_INDEX_SQL: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS tasks_slug_key ON tasks (slug)";

/// Builds a store against `DATABASE_URL`, or `None` when the variable is
/// unset and the suite should be skipped.
fn provisioned_store() -> Option<PostgresTaskStore> {
    let database_url = std::env::var("DATABASE_URL").ok()?;
    let pool = Pool::builder()
        .max_size(2)
        .build(ConnectionManager::<PgConnection>::new(database_url))
        .expect("connection pool builds");
    let mut connection = pool.get().expect("database connection available");
    diesel::sql_query(CREATE_TABLE_SQL)
        .execute(&mut connection)
        .expect("tasks table exists");
    diesel::sql_query(CREATE_INDEX_SQL)
        .execute(&mut connection)
        .expect("unique slug index exists");
    Some(PostgresTaskStore::new(pool))
}

/// Returns a slug no other test run can collide with.
fn unique_slug(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

fn task(title: &str, slug: &str, image: Option<&str>, created_at: DateTime<Utc>) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: Title::new(title).expect("valid title"),
        text: TaskText::new("Test body").expect("valid text"),
        slug: Slug::new(slug).expect("valid slug"),
        image: image.map(|path| ImageRef::new(path).expect("valid media path")),
        created_at,
    })
}

fn timestamp(second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, second)
        .single()
        .expect("valid timestamp")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_then_find_by_slug_round_trips_the_record() {
    let Some(store) = provisioned_store() else {
        return;
    };
    let slug = unique_slug("round-trip");
    let stored = task("Test title", &slug, Some("tasks/small.gif"), timestamp(0));
    store.insert(&stored).await.expect("insert succeeds");

    let found = store
        .find_by_slug(&Slug::new(slug.clone()).expect("valid slug"))
        .await
        .expect("lookup succeeds")
        .expect("record was stored");
    assert_eq!(found.title().as_str(), "Test title");
    assert_eq!(found.text().as_str(), "Test body");
    assert_eq!(found.slug().as_str(), slug);
    assert_eq!(
        found.image().map(|image| image.as_str()),
        Some("tasks/small.gif")
    );
    assert_eq!(found.created_at(), stored.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_slug_misses_unknown_slugs() {
    let Some(store) = provisioned_store() else {
        return;
    };
    let missing = store
        .find_by_slug(&Slug::new(unique_slug("missing")).expect("valid slug"))
        .await
        .expect("lookup succeeds");
    assert!(missing.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_orders_rows_by_creation_time() {
    let Some(store) = provisioned_store() else {
        return;
    };
    let earlier_slug = unique_slug("earlier");
    let later_slug = unique_slug("later");
    // Inserted newest-first; listing must come back oldest-first.
    store
        .insert(&task("Later", &later_slug, None, timestamp(30)))
        .await
        .expect("insert succeeds");
    store
        .insert(&task("Earlier", &earlier_slug, None, timestamp(10)))
        .await
        .expect("insert succeeds");

    let listed = store.list().await.expect("list succeeds");
    let position = |slug: &str| {
        listed
            .iter()
            .position(|stored| stored.slug().as_str() == slug)
            .expect("inserted record is listed")
    };
    assert!(position(&earlier_slug) < position(&later_slug));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn slug_exists_reflects_stored_records() {
    let Some(store) = provisioned_store() else {
        return;
    };
    let slug = Slug::new(unique_slug("exists")).expect("valid slug");
    assert!(!store.slug_exists(&slug).await.expect("check succeeds"));

    store
        .insert(&task("Test title", slug.as_str(), None, timestamp(0)))
        .await
        .expect("insert succeeds");
    assert!(store.slug_exists(&slug).await.expect("check succeeds"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_insert_is_rejected_by_the_unique_index() {
    let Some(store) = provisioned_store() else {
        return;
    };
    let slug = unique_slug("duplicate");
    store
        .insert(&task("First", &slug, None, timestamp(0)))
        .await
        .expect("first insert succeeds");

    // Simulates the losing side of the check-then-insert race: validation
    // was bypassed entirely, the index still rejects the write.
    let result = store.insert(&task("Racer", &slug, None, timestamp(1))).await;
    assert!(matches!(
        result,
        Err(TaskStoreError::DuplicateSlug(rejected)) if rejected.as_str() == slug
    ));
}
