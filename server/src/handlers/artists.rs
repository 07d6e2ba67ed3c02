use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::Form;
use chrono::Utc;
use garde::Validate;
use tracing::{error, info, warn};

use crate::forms::{ArtistForm, FieldErrors, SearchForm};
use crate::listing::partition_shows;
use crate::utils::error::AppError;
use crate::utils::extract::EntityId;
use crate::utils::flash::{self, Flash};
use crate::utils::response::{home_with_notice, page, redirect_with_flash};
use crate::views;
use crate::AppState;

const NEW_ARTIST_TITLE: &str = "List a new artist";

fn artist_not_found(artist_id: i32) -> AppError {
    AppError::NotFound(format!("artist {artist_id}"))
}

/// # GET /artists
pub async fn artists(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let artists = state.directory.artist_summaries().await?;

    let (jar, flash) = flash::take(jar);
    Ok((jar, views::artists::list(flash.as_ref(), &artists)).into_response())
}

/// # POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(search): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    let term = search.search_term.trim();
    let hits = state.directory.search_artists(term, Utc::now()).await?;
    Ok(views::artists::search_results(term, &hits))
}

/// # GET /artists/:artist_id
pub async fn show_artist(
    State(state): State<AppState>,
    EntityId(artist_id): EntityId,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let artist = state
        .directory
        .artist(artist_id)
        .await?
        .ok_or_else(|| artist_not_found(artist_id))?;
    let shows = partition_shows(state.directory.artist_shows(artist_id).await?, Utc::now());

    let (jar, flash) = flash::take(jar);
    Ok((jar, views::artists::detail(flash.as_ref(), &artist, &shows)).into_response())
}

/// # GET /artists/create
pub async fn create_artist_form() -> Html<String> {
    views::artists::form(
        NEW_ARTIST_TITLE,
        "/artists/create",
        &ArtistForm::default(),
        &FieldErrors::new(),
    )
}

/// # POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ArtistForm>,
) -> Response {
    if let Err(report) = form.validate() {
        let errors = FieldErrors::from(report);
        warn!(errors = %errors, "Rejected artist submission");
        return page(
            StatusCode::BAD_REQUEST,
            views::artists::form(NEW_ARTIST_TITLE, "/artists/create", &form, &errors),
        );
    }

    match state.directory.create_artist(form.into_new_artist()).await {
        Ok(artist) => {
            info!(artist_id = artist.id, "Artist listed");
            redirect_with_flash(
                jar,
                &format!("/artists/{}", artist.id),
                Flash::success(format!(
                    "{} was successfully listed with ID {}!",
                    artist.name, artist.id
                )),
            )
        }
        Err(e) => {
            error!(error = ?e, "Failed to add artist");
            home_with_notice(Flash::error(format!(
                "An error occurred while trying to add new artist: {e}"
            )))
        }
    }
}

/// # GET /artists/:artist_id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    EntityId(artist_id): EntityId,
) -> Result<Html<String>, AppError> {
    let artist = state
        .directory
        .artist(artist_id)
        .await?
        .ok_or_else(|| artist_not_found(artist_id))?;

    Ok(views::artists::form(
        &format!("Edit artist {}", artist.name),
        &format!("/artists/{artist_id}/edit"),
        &ArtistForm::from(&artist),
        &FieldErrors::new(),
    ))
}

/// # POST /artists/:artist_id/edit
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    EntityId(artist_id): EntityId,
    jar: CookieJar,
    Form(form): Form<ArtistForm>,
) -> Result<Response, AppError> {
    if let Err(report) = form.validate() {
        let errors = FieldErrors::from(report);
        warn!(artist_id, errors = %errors, "Rejected artist edit");
        return Ok(page(
            StatusCode::BAD_REQUEST,
            views::artists::form(
                &format!("Edit artist {artist_id}"),
                &format!("/artists/{artist_id}/edit"),
                &form,
                &errors,
            ),
        ));
    }

    match state
        .directory
        .update_artist(artist_id, form.into_changes())
        .await
    {
        Ok(Some(_)) => {
            info!(artist_id, "Artist updated");
            Ok(redirect_with_flash(
                jar,
                &format!("/artists/{artist_id}"),
                Flash::success(format!("{artist_id} was successfully updated!")),
            ))
        }
        Ok(None) => Err(artist_not_found(artist_id)),
        Err(e) => {
            error!(artist_id, error = ?e, "Failed to update artist");
            Ok(home_with_notice(Flash::error(format!(
                "An error occurred while trying to update artist: {e}"
            ))))
        }
    }
}

/// # DELETE /artists/:artist_id
pub async fn delete_artist(
    State(state): State<AppState>,
    EntityId(artist_id): EntityId,
    jar: CookieJar,
) -> Result<Response, AppError> {
    match state.directory.delete_artist(artist_id).await {
        Ok(Some(artist)) => {
            info!(artist_id, "Artist deleted");
            Ok(redirect_with_flash(
                jar,
                "/",
                Flash::success(format!("{} was successfully deleted", artist.name)),
            ))
        }
        Ok(None) => Err(artist_not_found(artist_id)),
        Err(e) => {
            error!(artist_id, error = ?e, "Failed to delete artist");
            Ok(home_with_notice(Flash::error(format!(
                "An error occurred while trying to delete {artist_id}: {e}"
            ))))
        }
    }
}
