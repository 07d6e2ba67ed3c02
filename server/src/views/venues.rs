use axum::response::Html;

use super::shows::{partitioned_sections, Counterpart};
use super::{
    checkbox_field, delete_button, escape, genre_tags, image, layout, multi_select_field,
    optional_link, search_box, select_field, text_field,
};
use crate::forms::{FieldErrors, VenueForm, GENRES, PHONE_PATTERN, STATES};
use crate::listing::{Area, PartitionedShows};
use crate::models::{SearchHit, Venue};
use crate::utils::flash::Flash;

pub fn list(flash: Option<&Flash>, areas: &[Area]) -> Html<String> {
    let sections: String = areas
        .iter()
        .map(|area| {
            let venues: String = area
                .venues
                .iter()
                .map(|venue| {
                    format!(
                        r#"<li><a href="/venues/{}">{}</a> <small>{} upcoming</small></li>"#,
                        venue.id,
                        escape(&venue.name),
                        venue.num_upcoming_shows
                    )
                })
                .collect();
            format!(
                r#"<div class="card"><h3>{}, {}</h3><ul>{venues}</ul></div>"#,
                escape(&area.city),
                escape(&area.state)
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Venues</h1>
        {search}
        <p><a href="/venues/create">List a venue</a></p>
        {sections}"#,
        search = search_box("/venues/search", "Find a venue", ""),
    );
    layout("Venues", flash, &body)
}

pub fn search_results(term: &str, hits: &[SearchHit]) -> Html<String> {
    let rows: String = hits
        .iter()
        .map(|hit| {
            format!(
                r#"<li><a href="/venues/{}">{}</a> <small>{} upcoming</small></li>"#,
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
        search = search_box("/venues/search", "Find a venue", term),
        term = escape(term),
        count = hits.len(),
    );
    layout("Venue Search", None, &body)
}

pub fn detail(flash: Option<&Flash>, venue: &Venue, shows: &PartitionedShows) -> Html<String> {
    let seeking = if venue.seeking_talent {
        format!(
            r#"<div class="card"><strong>Currently seeking talent</strong><p>{}</p></div>"#,
            escape(venue.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        "<p>Not currently seeking talent</p>".to_string()
    };

    let body = format!(
        r#"<h1>{name}</h1>
        <p class="subtitle">ID: {id}</p>
        {genres}
        {image}
        <p>{address}</p>
        <p>{city}, {state}</p>
        <p>{phone}</p>
        {website}
        {facebook}
        {seeking}
        <p><a href="/venues/{id}/edit">Edit</a> {delete}</p>
        {shows}"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_tags(&venue.genres),
        image = image(venue.image_link.as_deref(), &venue.name),
        address = escape(venue.address.as_deref().unwrap_or_default()),
        city = escape(venue.city.as_deref().unwrap_or_default()),
        state = escape(venue.state.as_deref().unwrap_or_default()),
        phone = escape(venue.phone.as_deref().unwrap_or_default()),
        website = optional_link("Website", venue.website.as_deref()),
        facebook = optional_link("Facebook", venue.facebook_link.as_deref()),
        delete = delete_button(&format!("/venues/{}", venue.id), "Delete"),
        shows = partitioned_sections(&shows.past, &shows.upcoming, Counterpart::Artist),
    );
    layout(&venue.name, flash, &body)
}

/// The create and edit forms share markup; `action` decides where it posts.
pub fn form(title: &str, action: &str, form: &VenueForm, errors: &FieldErrors) -> Html<String> {
    let phone_attrs = format!(r#"pattern="{}""#, PHONE_PATTERN.trim_matches(['^', '$']));
    let body = format!(
        r#"<h1>{title}</h1>
        <form method="post" action="{action}">
            {name}
            {city}
            {state}
            {address}
            {phone}
            {genres}
            {website}
            {image_link}
            {facebook_link}
            {seeking}
            {seeking_description}
            <button type="submit">Save Venue</button>
        </form>"#,
        title = escape(title),
        name = text_field(errors, "name", "Name", Some(form.name.as_str()), "required"),
        city = text_field(errors, "city", "City", Some(form.city.as_str()), "required"),
        state = select_field(errors, "state", "State", &STATES, &form.state),
        address = text_field(errors, "address", "Address", Some(form.address.as_str()), "required"),
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
        seeking = checkbox_field("seeking_talent", "Seeking Talent", form.seeking_talent),
        seeking_description = text_field(
            errors,
            "seeking_description",
            "Seeking Talent Description",
            form.seeking_description.as_deref(),
            ""
        ),
    );
    layout(title, None, &body)
}
