use axum::response::Html;

use super::shows::{partitioned_sections, Counterpart};
use super::{
    checkbox_field, delete_button, escape, genre_tags, image, layout, multi_select_field,
    optional_link, search_box, select_field, text_field,
};
use crate::forms::{ArtistForm, FieldErrors, GENRES, PHONE_PATTERN, STATES};
use crate::listing::PartitionedShows;
use crate::models::{Artist, ArtistSummary, SearchHit};
use crate::utils::flash::Flash;

pub fn list(flash: Option<&Flash>, artists: &[ArtistSummary]) -> Html<String> {
    let rows: String = artists
        .iter()
        .map(|artist| {
            format!(
                r#"<li><a href="/artists/{}">{}</a></li>"#,
                artist.id,
                escape(&artist.name)
            )
        })
        .collect();
    let body = format!(
        r#"<h1>Artists</h1>
        {search}
        <p><a href="/artists/create">List an artist</a></p>
        <ul>{rows}</ul>"#,
        search = search_box("/artists/search", "Find an artist", ""),
    );
    layout("Artists", flash, &body)
}

pub fn search_results(term: &str, hits: &[SearchHit]) -> Html<String> {
    let rows: String = hits
        .iter()
        .map(|hit| {
            format!(
                r#"<li><a href="/artists/{}">{}</a> <small>{} upcoming</small></li>"#,
                hit.id,
                escape(&hit.name),
                hit.num_upcoming_shows
            )
        })
        .collect();
    let body = format!(
        r#"{search}
        <h2>Number of search results for "{term}": {count}</h2>
        <ul>{rows}</ul>"#,
        search = search_box("/artists/search", "Find an artist", term),
        term = escape(term),
        count = hits.len(),
    );
    layout("Artist Search", None, &body)
}

pub fn detail(flash: Option<&Flash>, artist: &Artist, shows: &PartitionedShows) -> Html<String> {
    let seeking = if artist.seeking_venue {
        format!(
            r#"<div class="card"><strong>Currently seeking performance venues</strong><p>{}</p></div>"#,
            escape(artist.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        "<p>Not currently seeking performance venues</p>".to_string()
    };

    let body = format!(
        r#"<h1>{name}</h1>
        <p class="subtitle">ID: {id}</p>
        {genres}
        {image}
        <p>{city}, {state}</p>
        <p>{phone}</p>
        {website}
        {facebook}
        {seeking}
        <p><a href="/artists/{id}/edit">Edit</a> {delete}</p>
        {shows}"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_tags(&artist.genres),
        image = image(artist.image_link.as_deref(), &artist.name),
        city = escape(artist.city.as_deref().unwrap_or_default()),
        state = escape(artist.state.as_deref().unwrap_or_default()),
        phone = escape(artist.phone.as_deref().unwrap_or_default()),
        website = optional_link("Website", artist.website.as_deref()),
        facebook = optional_link("Facebook", artist.facebook_link.as_deref()),
        delete = delete_button(&format!("/artists/{}", artist.id), "Delete"),
        shows = partitioned_sections(&shows.past, &shows.upcoming, Counterpart::Venue),
    );
    layout(&artist.name, flash, &body)
}

pub fn form(title: &str, action: &str, form: &ArtistForm, errors: &FieldErrors) -> Html<String> {
    let phone_attrs = format!(r#"pattern="{}""#, PHONE_PATTERN.trim_matches(['^', '$']));
    let body = format!(
        r#"<h1>{title}</h1>
        <form method="post" action="{action}">
            {name}
            {city}
            {state}
            {phone}
            {genres}
            {website}
            {image_link}
            {facebook_link}
            {seeking}
            {seeking_description}
            <button type="submit">Save Artist</button>
        </form>"#,
        title = escape(title),
        name = text_field(errors, "name", "Name", Some(form.name.as_str()), "required"),
        city = text_field(errors, "city", "City", Some(form.city.as_str()), "required"),
        state = select_field(errors, "state", "State", &STATES, &form.state),
        phone = text_field(errors, "phone", "Phone", form.phone.as_deref(), &phone_attrs),
        genres = multi_select_field(errors, "genres", "Genres", &GENRES, &form.genres),
        website = text_field(errors, "website", "Website", form.website.as_deref(), ""),
        image_link = text_field(errors, "image_link", "Image Link", form.image_link.as_deref(), ""),
        facebook_link = text_field(
            errors,
            "facebook_link",
            "Facebook Link",
            form.facebook_link.as_deref(),
            ""
        ),
        seeking = checkbox_field("seeking_venue", "Seeking Venue", form.seeking_venue),
        seeking_description = text_field(
            errors,
            "seeking_description",
            "Seeking Venue Description",
            form.seeking_description.as_deref(),
            ""
        ),
    );
    layout(title, None, &body)
}
