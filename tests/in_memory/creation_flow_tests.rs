//! Form submission, validation, and persistence through the router.

use rstest::rstest;
use tablero::task::{
    forms::UploadedImage,
    ports::TaskStore,
};
use tablero::web::{context::SessionContext, router::Method};

use super::helpers::{Harness, harness, redirect_location, submission};

// A minimal one-pixel GIF, enough to exercise the upload path.
const SMALL_GIF: &[u8] = &[
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x21, 0xf9,
    0x04, 0x01, 0x0a, 0x00, 0x01, 0x00, 0x2c, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00,
    0x00, 0x02, 0x02, 0x4c, 0x01, 0x00, 0x3b,
];

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn valid_submission_creates_one_record_and_redirects(harness: Harness) {
    let before = harness.store.list().await.expect("list succeeds").len();

    let response = harness
        .router
        .dispatch(
            &SessionContext::anonymous(),
            Method::Post,
            "/",
            Some(
                submission("Тестовый заголовок", "Test body")
                    .with_image(UploadedImage::new("small.gif", SMALL_GIF)),
            ),
        )
        .await
        .expect("submission succeeds");
    assert_eq!(redirect_location(&response), "/added/");

    let stored = harness.store.list().await.expect("list succeeds");
    assert_eq!(stored.len(), before + 1);
    let task = stored.first().expect("one record stored");
    assert_eq!(task.slug().as_str(), "testovyij-zagolovok");
    let image = task.image().expect("image reference stored");
    assert_eq!(image.as_str(), "tasks/small.gif");
    let content = harness
        .media
        .content(image)
        .expect("media store is readable");
    assert_eq!(content.as_deref(), Some(SMALL_GIF));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_slug_submission_creates_nothing(harness: Harness) {
    harness
        .router
        .dispatch(
            &SessionContext::anonymous(),
            Method::Post,
            "/",
            Some(submission("First task", "Body").with_slug("first")),
        )
        .await
        .expect("first submission succeeds");
    let before = harness.store.list().await.expect("list succeeds").len();

    let response = harness
        .router
        .dispatch(
            &SessionContext::anonymous(),
            Method::Post,
            "/",
            Some(submission("Second task", "Body").with_slug("first")),
        )
        .await
        .expect("rejection is still a page");

    assert_eq!(response.status_code(), 200);
    let page = response.as_page().expect("form re-renders");
    assert!(
        page.html()
            .contains("Slug &quot;first&quot; already exists, enter a unique value")
    );
    assert_eq!(
        harness.store.list().await.expect("list succeeds").len(),
        before
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_title_submission_uses_the_default_title(harness: Harness) {
    harness
        .router
        .dispatch(
            &SessionContext::anonymous(),
            Method::Post,
            "/",
            Some(submission("", "Body")),
        )
        .await
        .expect("submission succeeds");

    let stored = harness.store.list().await.expect("list succeeds");
    assert_eq!(
        stored.first().map(|task| task.title().as_str()),
        Some("Untitled task")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn long_title_submission_derives_a_truncated_slug(harness: Harness) {
    let title = "I am a str".repeat(10);
    harness
        .router
        .dispatch(
            &SessionContext::anonymous(),
            Method::Post,
            "/",
            Some(submission(&title, "Body")),
        )
        .await
        .expect("submission succeeds");

    let stored = harness.store.list().await.expect("list succeeds");
    let slug = stored.first().expect("record stored").slug();
    assert_eq!(slug.as_str(), "i-am-a-str".repeat(10));
    assert_eq!(slug.as_str().chars().count(), 100);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_text_submission_re_renders_with_the_field_error(harness: Harness) {
    let response = harness
        .router
        .dispatch(
            &SessionContext::anonymous(),
            Method::Post,
            "/",
            Some(submission("Test title", "")),
        )
        .await
        .expect("rejection is still a page");

    assert_eq!(response.status_code(), 200);
    let page = response.as_page().expect("form re-renders");
    assert!(page.html().contains("This field is required."));
    assert!(harness.store.list().await.expect("list succeeds").is_empty());
}
