use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::utils::flash::{self, Flash};
use crate::views;

/// Renders a full page with the given status.
pub fn page(status: StatusCode, html: Html<String>) -> Response {
    (status, html).into_response()
}

/// 303 to `location`, carrying `notice` to the page rendered there.
pub fn redirect_with_flash(jar: CookieJar, location: &str, notice: Flash) -> Response {
    (flash::set(jar, &notice), Redirect::to(location)).into_response()
}

/// Fallback after a failed write: the home page with the notice inline.
pub fn home_with_notice(notice: Flash) -> Response {
    page(StatusCode::OK, views::pages::home(Some(&notice)))
}
