use axum::response::Html;

use super::{escape, field_errors, format_datetime, image, layout, select_field, DateFormat};
use crate::forms::{FieldErrors, ShowForm};
use crate::models::ShowListing;
use crate::utils::flash::Flash;

/// Which side of a show a detail page lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counterpart {
    Artist,
    Venue,
}

pub(crate) fn counterpart_cards(shows: &[ShowListing], counterpart: Counterpart) -> String {
    shows
        .iter()
        .map(|show| {
            let (href, name, image_link) = match counterpart {
                Counterpart::Artist => (
                    format!("/artists/{}", show.artist_id),
                    &show.artist_name,
                    show.artist_image_link.as_deref(),
                ),
                Counterpart::Venue => (
                    format!("/venues/{}", show.venue_id),
                    &show.venue_name,
                    show.venue_image_link.as_deref(),
                ),
            };
            format!(
                r#"<div class="card">{image}<h4><a href="{href}">{name}</a></h4><p>{when}</p></div>"#,
                image = image(image_link, name),
                name = escape(name),
                when = format_datetime(&show.start_time, DateFormat::Full),
            )
        })
        .collect()
}

/// Past and upcoming sections of a venue or artist page.
pub(crate) fn partitioned_sections(
    past: &[ShowListing],
    upcoming: &[ShowListing],
    counterpart: Counterpart,
) -> String {
    format!(
        r#"<section>
            <h3>{upcoming_count} Upcoming Shows</h3>
            {upcoming}
        </section>
        <section>
            <h3>{past_count} Past Shows</h3>
            {past}
        </section>"#,
        upcoming_count = upcoming.len(),
        upcoming = counterpart_cards(upcoming, counterpart),
        past_count = past.len(),
        past = counterpart_cards(past, counterpart),
    )
}

pub fn list(flash: Option<&Flash>, shows: &[ShowListing]) -> Html<String> {
    let rows: String = shows
        .iter()
        .map(|show| {
            format!(
                r#"<div class="card">
                    {image}
                    <h4><a href="/artists/{artist_id}">{artist}</a></h4>
                    <p>playing at <a href="/venues/{venue_id}">{venue}</a></p>
                    <p>{when}</p>
                </div>"#,
                image = image(show.artist_image_link.as_deref(), &show.artist_name),
                artist_id = show.artist_id,
                artist = escape(&show.artist_name),
                venue_id = show.venue_id,
                venue = escape(&show.venue_name),
                when = format_datetime(&show.start_time, DateFormat::Medium),
            )
        })
        .collect();
    let body = format!(
        r#"<h1>Shows</h1>
        <p><a href="/shows/create">Post a show</a></p>
        {rows}"#
    );
    layout("Shows", flash, &body)
}

pub fn form(form: &ShowForm, errors: &FieldErrors, time_zones: &[&str]) -> Html<String> {
    let body = format!(
        r#"<h1>List a new show</h1>
        <form method="post" action="/shows/create">
            <div class="field">
                <label for="artist_id">Artist ID</label>
                <input type="text" id="artist_id" name="artist_id" value="{artist_id}" required>
                {artist_errors}
            </div>
            <div class="field">
                <label for="venue_id">Venue ID</label>
                <input type="text" id="venue_id" name="venue_id" value="{venue_id}" required>
                {venue_errors}
            </div>
            <div class="field">
                <label for="start_time">Start Time</label>
                <input type="text" id="start_time" name="start_time" value="{start_time}" placeholder="YYYY-MM-DD HH:MM:SS" required>
                {start_errors}
            </div>
            {time_zone}
            <button type="submit">Create Show</button>
        </form>"#,
        artist_id = escape(&form.artist_id),
        artist_errors = field_errors(errors, "artist_id"),
        venue_id = escape(&form.venue_id),
        venue_errors = field_errors(errors, "venue_id"),
        start_time = escape(&form.start_time),
        start_errors = field_errors(errors, "start_time"),
        time_zone = select_field(errors, "time_zone", "Time Zone", time_zones, &form.time_zone),
    );
    layout("New Show", None, &body)
}
