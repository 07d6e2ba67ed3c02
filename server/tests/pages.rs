mod common;

use axum::http::{header, StatusCode};
use common::*;

#[tokio::test]
async fn test_home_page() {
    let app = setup_app();

    let response = send(&app, get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
    assert!(body_text(response).await.contains(r#"href="/venues/create""#));
}

#[tokio::test]
async fn test_unknown_route_renders_404_page() {
    let app = setup_app();

    let response = send(&app, get("/nowhere")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("404"));
}

#[tokio::test]
async fn test_unparseable_ids_render_404_page() {
    let app = setup_app();

    for uri in ["/venues/abc", "/artists/abc/edit", "/venues/99999999999", "/artists/-"] {
        let response = send(&app, get(uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert!(body_text(response).await.contains("<h1>404</h1>"), "{uri}");
    }

    let response = send(&app, delete("/venues/abc")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, post_form("/venues/abc/edit", FILLMORE_FORM)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
