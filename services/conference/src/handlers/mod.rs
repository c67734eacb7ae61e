pub mod admin;
pub mod auth;
pub mod health;
pub mod pages;

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use podium_domain::schedule::display_start_time;
use podium_session::cookie::set_flash;

use crate::domain::types::{Presentation, ScheduleRow};
use crate::state::AppState;

/// 303 to `to`, showing `message` on the next rendered page.
pub(crate) fn redirect_with_flash(
    jar: CookieJar,
    state: &AppState,
    message: impl Into<String>,
    to: &str,
) -> Response {
    (set_flash(jar, message, &state.cookies), Redirect::to(to)).into_response()
}

#[derive(Debug, Serialize)]
pub(crate) struct ScheduleItemView {
    pub id: i32,
    pub date_start: String,
    pub room: String,
    pub presentation: String,
}

impl From<&ScheduleRow> for ScheduleItemView {
    fn from(row: &ScheduleRow) -> Self {
        Self {
            id: row.entry.id,
            date_start: display_start_time(&row.entry.date_start),
            room: row.room.label(),
            presentation: row.presentation_name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PresentationView {
    pub id: i32,
    pub name: String,
    pub text: Option<String>,
}

impl From<Presentation> for PresentationView {
    fn from(p: Presentation) -> Self {
        Self {
            id: p.id,
            name: p.name,
            text: p.text,
        }
    }
}
