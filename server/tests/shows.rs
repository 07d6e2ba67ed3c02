//! Shows tie artists to venues; these cover creation, listing and the
//! upcoming/past split on both detail pages.

mod common;

use axum::http::StatusCode;
use common::*;

const FUTURE_SHOW: &str =
    "artist_id=1&venue_id=1&start_time=2035-05-21+21%3A30%3A00&time_zone=US%2FPacific";
const PAST_SHOW: &str =
    "artist_id=1&venue_id=1&start_time=2019-06-15+23%3A00%3A00&time_zone=US%2FEastern";

async fn seeded_app() -> axum::Router {
    let app = setup_app();
    create(&app, "/venues/create", FILLMORE_FORM).await;
    create(&app, "/artists/create", PETALS_FORM).await;
    app
}

#[tokio::test]
async fn test_future_show_is_upcoming_on_both_sides() {
    let app = seeded_app().await;

    let response = send(&app, post_form("/shows/create", FUTURE_SHOW)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/shows");

    let venue = body_text(send(&app, get("/venues/1")).await).await;
    assert!(venue.contains("1 Upcoming Shows"));
    assert!(venue.contains("0 Past Shows"));
    assert!(venue.contains("Guns N Petals"));

    let artist = body_text(send(&app, get("/artists/1")).await).await;
    assert!(artist.contains("1 Upcoming Shows"));
    assert!(artist.contains("The Fillmore"));
}

#[tokio::test]
async fn test_start_time_stored_in_utc() {
    let app = seeded_app().await;
    create(&app, "/shows/create", FUTURE_SHOW).await;

    // 21:30 Pacific daylight time is 04:30 UTC the next day.
    let html = body_text(send(&app, get("/shows")).await).await;
    assert!(html.contains("Tue 05, 22, 2035 4:30AM"));
}

#[tokio::test]
async fn test_past_show_counted_as_past() {
    let app = seeded_app().await;
    create(&app, "/shows/create", PAST_SHOW).await;
    create(&app, "/shows/create", FUTURE_SHOW).await;

    let venue = body_text(send(&app, get("/venues/1")).await).await;
    assert!(venue.contains("1 Upcoming Shows"));
    assert!(venue.contains("1 Past Shows"));

    // The area listing counts only upcoming shows.
    let listing = body_text(send(&app, get("/venues")).await).await;
    assert!(listing.contains("The Fillmore"));
    assert!(listing.contains("<small>1 upcoming</small>"));
}

#[tokio::test]
async fn test_shows_listing_and_flash() {
    let app = seeded_app().await;
    let response = send(&app, post_form("/shows/create", FUTURE_SHOW)).await;
    let cookie = flash_cookie(&response);

    let html = body_text(send(&app, get_with_cookie("/shows", &cookie)).await).await;
    assert!(html.contains("New show was successfully listed with ID 1!"));
    assert!(html.contains(r#"href="/venues/1""#));
    assert!(html.contains(r#"href="/artists/1""#));
}

#[tokio::test]
async fn test_unknown_ids_rejected() {
    let app = seeded_app().await;
    let body = FUTURE_SHOW.replace("artist_id=1", "artist_id=7");

    let response = send(&app, post_form("/shows/create", &body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("No artist with id 7."));

    let html = body_text(send(&app, get("/shows")).await).await;
    assert!(!html.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_non_us_zone_rejected() {
    let app = seeded_app().await;
    let body = FUTURE_SHOW.replace("US%2FPacific", "Europe%2FParis");

    let response = send(&app, post_form("/shows/create", &body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_nonexistent_local_time_rejected() {
    let app = seeded_app().await;
    // Clocks jump from 02:00 to 03:00 on this date.
    let body = "artist_id=1&venue_id=1&start_time=2035-03-11+02%3A30%3A00&time_zone=US%2FEastern";

    let response = send(&app, post_form("/shows/create", body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("does not exist in US/Eastern"));
}

#[tokio::test]
async fn test_deleting_venue_removes_its_shows() {
    let app = seeded_app().await;
    create(&app, "/shows/create", FUTURE_SHOW).await;

    let response = send(&app, delete("/venues/1")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let artist = body_text(send(&app, get("/artists/1")).await).await;
    assert!(artist.contains("0 Upcoming Shows"));

    let shows = body_text(send(&app, get("/shows")).await).await;
    assert!(!shows.contains("The Fillmore"));
}

#[tokio::test]
async fn test_create_form_lists_us_zones() {
    let app = setup_app();

    let html = body_text(send(&app, get("/shows/create")).await).await;
    assert!(html.contains(r#"<option value="US/Pacific" selected>"#));
    assert!(html.contains("US/Eastern"));
    assert!(!html.contains("Europe/Paris"));
}
