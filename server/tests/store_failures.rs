//! A failing store never surfaces as a 500 on the write paths: the handler
//! falls back to the home page and names the failure in an error notice.

mod common;

use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use common::*;

async fn assert_home_with_notice(response: Response<Body>, action: &str) {
    assert_eq!(response.status(), StatusCode::OK, "{action}");
    assert!(!response.headers().contains_key(header::LOCATION));

    let html = body_text(response).await;
    assert!(html.contains("<h1>Gigbook</h1>"), "{action} should render home");
    assert!(
        html.contains(&format!("An error occurred while trying to {action}: {STORE_FAILURE}")),
        "{action} notice missing"
    );
}

#[tokio::test]
async fn test_create_venue_failure() {
    let app = setup_unavailable_app();

    let response = send(&app, post_form("/venues/create", FILLMORE_FORM)).await;
    assert_home_with_notice(response, "add new venue").await;
}

#[tokio::test]
async fn test_edit_venue_failure() {
    let app = setup_unavailable_app();

    let response = send(&app, post_form("/venues/1/edit", FILLMORE_FORM)).await;
    assert_home_with_notice(response, "update venue").await;
}

#[tokio::test]
async fn test_create_artist_failure() {
    let app = setup_unavailable_app();

    let response = send(&app, post_form("/artists/create", PETALS_FORM)).await;
    assert_home_with_notice(response, "add new artist").await;
}

#[tokio::test]
async fn test_delete_artist_failure() {
    let app = setup_unavailable_app();

    let response = send(&app, delete("/artists/1")).await;
    assert_home_with_notice(response, "delete 1").await;
}

#[tokio::test]
async fn test_create_show_failure() {
    let app = setup_unavailable_app();
    let body = "artist_id=1&venue_id=1&start_time=2035-05-21+21%3A30%3A00&time_zone=US%2FPacific";

    let response = send(&app, post_form("/shows/create", body)).await;
    assert_home_with_notice(response, "add new show").await;
}

#[tokio::test]
async fn test_read_failure_renders_500_page() {
    let app = setup_unavailable_app();

    let response = send(&app, get("/venues")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body_text(response).await.contains(STORE_FAILURE));
}
