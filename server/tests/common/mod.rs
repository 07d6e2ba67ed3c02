//! Shared helpers for driving the router end to end over the in-memory store.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tower::util::ServiceExt;

use gigbook_server::db::{DbError, Directory};
use gigbook_server::models::{
    Artist, ArtistChanges, ArtistSummary, NewArtist, NewShow, NewVenue, SearchHit, Show,
    ShowListing, Venue, VenueChanges, VenueSummary,
};
use gigbook_server::routes::create_routes;
use gigbook_server::AppState;

pub const FILLMORE_FORM: &str = "name=The+Fillmore&city=San+Francisco&state=CA\
    &address=1805+Geary+Blvd&phone=4155551234&genres=Rock+n+Roll&genres=Jazz\
    &website=https%3A%2F%2Fwww.thefillmore.com";

pub const PETALS_FORM: &str = "name=Guns+N+Petals&city=San+Francisco&state=CA\
    &genres=Rock+n+Roll&image_link=https%3A%2F%2Fimages.example.com%2Fpetals.jpg\
    &seeking_venue=y&seeking_description=Looking+for+shows";

pub fn setup_app() -> Router {
    create_routes(AppState::in_memory())
}

/// Text of every error raised by [`UnavailableDirectory`].
pub const STORE_FAILURE: &str = "pool timed out while waiting for an open connection";

/// A store whose every call fails as if the pool were exhausted.
pub struct UnavailableDirectory;

fn unavailable<T>() -> Result<T, DbError> {
    Err(DbError::Query(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl Directory for UnavailableDirectory {
    async fn venue_summaries(&self, _now: DateTime<Utc>) -> Result<Vec<VenueSummary>, DbError> {
        unavailable()
    }
    async fn search_venues(
        &self,
        _term: &str,
        _now: DateTime<Utc>,
    ) -> Result<Vec<SearchHit>, DbError> {
        unavailable()
    }
    async fn venue(&self, _id: i32) -> Result<Option<Venue>, DbError> {
        unavailable()
    }
    async fn venue_shows(&self, _id: i32) -> Result<Vec<ShowListing>, DbError> {
        unavailable()
    }
    async fn venue_ids(&self) -> Result<Vec<i32>, DbError> {
        unavailable()
    }
    async fn create_venue(&self, _venue: NewVenue) -> Result<Venue, DbError> {
        unavailable()
    }
    async fn update_venue(
        &self,
        _id: i32,
        _changes: VenueChanges,
    ) -> Result<Option<Venue>, DbError> {
        unavailable()
    }
    async fn delete_venue(&self, _id: i32) -> Result<Option<Venue>, DbError> {
        unavailable()
    }

    async fn artist_summaries(&self) -> Result<Vec<ArtistSummary>, DbError> {
        unavailable()
    }
    async fn search_artists(
        &self,
        _term: &str,
        _now: DateTime<Utc>,
    ) -> Result<Vec<SearchHit>, DbError> {
        unavailable()
    }
    async fn artist(&self, _id: i32) -> Result<Option<Artist>, DbError> {
        unavailable()
    }
    async fn artist_shows(&self, _id: i32) -> Result<Vec<ShowListing>, DbError> {
        unavailable()
    }
    async fn artist_ids(&self) -> Result<Vec<i32>, DbError> {
        unavailable()
    }
    async fn create_artist(&self, _artist: NewArtist) -> Result<Artist, DbError> {
        unavailable()
    }
    async fn update_artist(
        &self,
        _id: i32,
        _changes: ArtistChanges,
    ) -> Result<Option<Artist>, DbError> {
        unavailable()
    }
    async fn delete_artist(&self, _id: i32) -> Result<Option<Artist>, DbError> {
        unavailable()
    }

    async fn shows(&self) -> Result<Vec<ShowListing>, DbError> {
        unavailable()
    }
    async fn create_show(&self, _show: NewShow) -> Result<Show, DbError> {
        unavailable()
    }
}

pub fn setup_unavailable_app() -> Router {
    create_routes(AppState::new(Arc::new(UnavailableDirectory)))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("Should redirect")
        .to_str()
        .unwrap()
        .to_string()
}

/// `name=value` part of the first Set-Cookie header, ready to send back.
pub fn flash_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Should set a flash cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

/// Posts a form that is expected to create something and returns the
/// redirect target.
pub async fn create(app: &Router, uri: &str, body: &str) -> String {
    let response = send(app, post_form(uri, body)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri} should redirect");
    location(&response)
}
