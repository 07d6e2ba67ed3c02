use axum::response::Html;

use super::{layout, search_box};
use crate::utils::flash::Flash;

pub fn home(flash: Option<&Flash>) -> Html<String> {
    let body = format!(
        r#"<h1>Gigbook</h1>
        <p>Find venues and artists, and book shows between them.</p>
        <div class="card">
            <h2>Venues</h2>
            {venue_search}
            <p><a href="/venues">Browse by city</a> &middot; <a href="/venues/create">List a venue</a></p>
        </div>
        <div class="card">
            <h2>Artists</h2>
            {artist_search}
            <p><a href="/artists">All artists</a> &middot; <a href="/artists/create">List an artist</a></p>
        </div>
        <div class="card">
            <h2>Shows</h2>
            <p><a href="/shows">Schedule</a> &middot; <a href="/shows/create">Post a show</a></p>
        </div>"#,
        venue_search = search_box("/venues/search", "Find a venue", ""),
        artist_search = search_box("/artists/search", "Find an artist", ""),
    );
    layout("Home", flash, &body)
}

pub fn not_found() -> Html<String> {
    layout(
        "Not Found",
        None,
        r#"<h1>404</h1><p>Nothing lives at this address. <a href="/">Back home</a></p>"#,
    )
}

pub fn server_error() -> Html<String> {
    layout(
        "Server Error",
        None,
        r#"<h1>500</h1><p>Something went wrong on our side. <a href="/">Back home</a></p>"#,
    )
}
