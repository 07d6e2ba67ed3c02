use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::Form;
use chrono::Utc;
use garde::Validate;
use tracing::{error, info, warn};

use crate::db::DbError;
use crate::forms::show::us_timezones;
use crate::forms::{FieldErrors, ShowContext, ShowForm};
use crate::utils::error::AppError;
use crate::utils::flash::{self, Flash};
use crate::utils::response::{home_with_notice, page, redirect_with_flash};
use crate::views;
use crate::AppState;

/// # GET /shows
pub async fn shows(State(state): State<AppState>, jar: CookieJar) -> Result<Response, AppError> {
    let shows = state.directory.shows().await?;

    let (jar, flash) = flash::take(jar);
    Ok((jar, views::shows::list(flash.as_ref(), &shows)).into_response())
}

/// # GET /shows/create
pub async fn create_show_form() -> Html<String> {
    views::shows::form(
        &ShowForm::with_defaults(Utc::now()),
        &FieldErrors::new(),
        &us_timezones(),
    )
}

async fn show_context(state: &AppState) -> Result<ShowContext, DbError> {
    let artist_ids = state.directory.artist_ids().await?;
    let venue_ids = state.directory.venue_ids().await?;
    Ok(ShowContext::new(artist_ids, venue_ids))
}

fn rejected(form: &ShowForm, errors: FieldErrors) -> Response {
    warn!(errors = %errors, "Rejected show submission");
    page(
        StatusCode::BAD_REQUEST,
        views::shows::form(form, &errors, &us_timezones()),
    )
}

/// # POST /shows/create
pub async fn create_show_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ShowForm>,
) -> Response {
    let failed = |e: DbError| {
        error!(error = ?e, "Failed to add show");
        home_with_notice(Flash::error(format!(
            "An error occurred while trying to add new show: {e}"
        )))
    };

    let context = match show_context(&state).await {
        Ok(context) => context,
        Err(e) => return failed(e),
    };
    if let Err(report) = form.validate_with(&context) {
        return rejected(&form, FieldErrors::from(report));
    }

    let Some(new_show) = form.clone().into_new_show() else {
        let mut errors = FieldErrors::new();
        errors.insert(
            "start_time",
            format!("This time does not exist in {}.", form.time_zone),
        );
        return rejected(&form, errors);
    };

    match state.directory.create_show(new_show).await {
        Ok(show) => {
            info!(
                show_id = show.id,
                venue_id = show.venue_id,
                artist_id = show.artist_id,
                "Show listed"
            );
            redirect_with_flash(
                jar,
                "/shows",
                Flash::success(format!("New show was successfully listed with ID {}!", show.id)),
            )
        }
        Err(e) => failed(e),
    }
}
