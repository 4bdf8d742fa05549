//! Login gating of the protected list and detail routes.

use rstest::rstest;
use tablero::web::{
    context::SessionContext,
    router::Method,
};

use super::helpers::{Harness, harness, redirect_location, submission};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn guest_list_request_redirects_to_login_with_next(harness: Harness) {
    let response = harness
        .router
        .dispatch(&SessionContext::anonymous(), Method::Get, "/task/", None)
        .await
        .expect("dispatch succeeds");
    assert_eq!(response.status_code(), 302);
    assert_eq!(redirect_location(&response), "/admin/login/?next=/task/");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn guest_detail_request_redirects_to_login_with_next(harness: Harness) {
    let response = harness
        .router
        .dispatch(
            &SessionContext::anonymous(),
            Method::Get,
            "/task/test-slug/",
            None,
        )
        .await
        .expect("dispatch succeeds");
    assert_eq!(
        redirect_location(&response),
        "/admin/login/?next=/task/test-slug/"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn authenticated_list_request_succeeds(harness: Harness) {
    let response = harness
        .router
        .dispatch(
            &SessionContext::authenticated("nora"),
            Method::Get,
            "/task/",
            None,
        )
        .await
        .expect("dispatch succeeds");
    assert_eq!(response.status_code(), 200);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_routes_are_reachable_without_a_session(harness: Harness) {
    for path in ["/", "/added/", "/page/about/"] {
        let response = harness
            .router
            .dispatch(&SessionContext::anonymous(), Method::Get, path, None)
            .await
            .expect("dispatch succeeds");
        assert_eq!(response.status_code(), 200, "path {path}");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn authenticated_detail_request_renders_the_task(harness: Harness) {
    harness
        .router
        .dispatch(
            &SessionContext::anonymous(),
            Method::Post,
            "/",
            Some(submission("Test title", "Test body").with_slug("test-slug")),
        )
        .await
        .expect("submission succeeds");

    let response = harness
        .router
        .dispatch(
            &SessionContext::authenticated("nora"),
            Method::Get,
            "/task/test-slug/",
            None,
        )
        .await
        .expect("dispatch succeeds");
    let page = response.as_page().expect("detail is a page");
    assert!(page.html().contains("Test title"));
    assert!(page.html().contains("Test body"));
}
