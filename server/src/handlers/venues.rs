use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::Form;
use chrono::Utc;
use garde::Validate;
use tracing::{error, info, warn};

use crate::forms::{FieldErrors, SearchForm, VenueForm};
use crate::listing::{group_by_area, partition_shows};
use crate::utils::error::AppError;
use crate::utils::extract::EntityId;
use crate::utils::flash::{self, Flash};
use crate::utils::response::{home_with_notice, page, redirect_with_flash};
use crate::views;
use crate::AppState;

const NEW_VENUE_TITLE: &str = "List a new venue";

fn venue_not_found(venue_id: i32) -> AppError {
    AppError::NotFound(format!("venue {venue_id}"))
}

/// # GET /venues
pub async fn venues(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let summaries = state.directory.venue_summaries(Utc::now()).await?;
    let areas = group_by_area(summaries);

    let (jar, flash) = flash::take(jar);
    Ok((jar, views::venues::list(flash.as_ref(), &areas)).into_response())
}

/// # POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(search): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    let term = search.search_term.trim();
    let hits = state.directory.search_venues(term, Utc::now()).await?;
    Ok(views::venues::search_results(term, &hits))
}

/// # GET /venues/:venue_id
pub async fn show_venue(
    State(state): State<AppState>,
    EntityId(venue_id): EntityId,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let venue = state
        .directory
        .venue(venue_id)
        .await?
        .ok_or_else(|| venue_not_found(venue_id))?;
    let shows = partition_shows(state.directory.venue_shows(venue_id).await?, Utc::now());

    let (jar, flash) = flash::take(jar);
    Ok((jar, views::venues::detail(flash.as_ref(), &venue, &shows)).into_response())
}

/// # GET /venues/create
pub async fn create_venue_form() -> Html<String> {
    views::venues::form(
        NEW_VENUE_TITLE,
        "/venues/create",
        &VenueForm::default(),
        &FieldErrors::new(),
    )
}

/// # POST /venues/create
pub async fn create_venue_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<VenueForm>,
) -> Response {
    if let Err(report) = form.validate() {
        let errors = FieldErrors::from(report);
        warn!(errors = %errors, "Rejected venue submission");
        return page(
            StatusCode::BAD_REQUEST,
            views::venues::form(NEW_VENUE_TITLE, "/venues/create", &form, &errors),
        );
    }

    match state.directory.create_venue(form.into_new_venue()).await {
        Ok(venue) => {
            info!(venue_id = venue.id, "Venue listed");
            redirect_with_flash(
                jar,
                &format!("/venues/{}", venue.id),
                Flash::success(format!(
                    "{} was successfully listed with ID {}!",
                    venue.name, venue.id
                )),
            )
        }
        Err(e) => {
            error!(error = ?e, "Failed to add venue");
            home_with_notice(Flash::error(format!(
                "An error occurred while trying to add new venue: {e}"
            )))
        }
    }
}

/// # GET /venues/:venue_id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    EntityId(venue_id): EntityId,
) -> Result<Html<String>, AppError> {
    let venue = state
        .directory
        .venue(venue_id)
        .await?
        .ok_or_else(|| venue_not_found(venue_id))?;

    Ok(views::venues::form(
        &format!("Edit venue {}", venue.name),
        &format!("/venues/{venue_id}/edit"),
        &VenueForm::from(&venue),
        &FieldErrors::new(),
    ))
}

/// # POST /venues/:venue_id/edit
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    EntityId(venue_id): EntityId,
    jar: CookieJar,
    Form(form): Form<VenueForm>,
) -> Result<Response, AppError> {
    if let Err(report) = form.validate() {
        let errors = FieldErrors::from(report);
        warn!(venue_id, errors = %errors, "Rejected venue edit");
        return Ok(page(
            StatusCode::BAD_REQUEST,
            views::venues::form(
                &format!("Edit venue {venue_id}"),
                &format!("/venues/{venue_id}/edit"),
                &form,
                &errors,
            ),
        ));
    }

    match state
        .directory
        .update_venue(venue_id, form.into_changes())
        .await
    {
        Ok(Some(_)) => {
            info!(venue_id, "Venue updated");
            Ok(redirect_with_flash(
                jar,
                &format!("/venues/{venue_id}"),
                Flash::success(format!("{venue_id} was successfully updated!")),
            ))
        }
        Ok(None) => Err(venue_not_found(venue_id)),
        Err(e) => {
            error!(venue_id, error = ?e, "Failed to update venue");
            Ok(home_with_notice(Flash::error(format!(
                "An error occurred while trying to update venue: {e}"
            ))))
        }
    }
}

/// # DELETE /venues/:venue_id
///
/// Shows at the venue are removed with it.
pub async fn delete_venue(
    State(state): State<AppState>,
    EntityId(venue_id): EntityId,
    jar: CookieJar,
) -> Result<Response, AppError> {
    match state.directory.delete_venue(venue_id).await {
        Ok(Some(venue)) => {
            info!(venue_id, "Venue deleted");
            Ok(redirect_with_flash(
                jar,
                "/",
                Flash::success(format!("{} was successfully deleted", venue.name)),
            ))
        }
        Ok(None) => Err(venue_not_found(venue_id)),
        Err(e) => {
            error!(venue_id, error = ?e, "Failed to delete venue");
            Ok(home_with_notice(Flash::error(format!(
                "An error occurred while trying to delete {venue_id}: {e}"
            ))))
        }
    }
}
