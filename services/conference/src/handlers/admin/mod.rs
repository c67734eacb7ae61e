//! Role-scoped admin screens.
//!
//! Presenters manage the presentations and schedule entries they author;
//! administrators manage everything. Users without a known role get 403 on
//! every screen.

pub mod authors;
pub mod presentations;
pub mod roles;
pub mod rooms;
pub mod schedule;
pub mod users;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use podium_session::cookie::take_flash;

use crate::error::ConferenceError;
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::templating::{Blank, Page, render};

// ── GET /admin ───────────────────────────────────────────────────────────────

pub async fn index(
    State(state): State<AppState>,
    current: CurrentUser,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    current.scope()?;
    let (jar, flash) = take_flash(jar, &state.cookies);
    let page = Page::new("Admin", Blank::default())
        .viewer(Some(&current.0))
        .flash(flash);
    Ok((jar, render("admin/index", &page)?).into_response())
}

/// Parse an id submitted through a `<select>`; blank means nothing chosen.
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// One `<option>` of a `<select>`.
#[derive(Debug, Serialize)]
pub(crate) struct SelectOption {
    pub value: i32,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: i32, label: impl Into<String>, selected: Option<i32>) -> Self {
        Self {
            value,
            label: label.into(),
            selected: selected == Some(value),
        }
    }
}
