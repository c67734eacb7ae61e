use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use podium_session::cookie::take_flash;

use crate::error::ConferenceError;
use crate::handlers::{PresentationView, ScheduleItemView};
use crate::session::{CurrentUser, MaybeUser};
use crate::state::AppState;
use crate::templating::{Blank, Page, render};
use crate::usecase::listing::{MainScheduleUseCase, PresenterPageUseCase};

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn index(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    let (jar, flash) = take_flash(jar, &state.cookies);
    let page = Page::new("Home", Blank::default())
        .viewer(user.as_ref())
        .flash(flash);
    Ok((jar, render("index", &page)?).into_response())
}

// ── GET /main ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ScheduleView {
    entries: Vec<ScheduleItemView>,
}

pub async fn main_schedule(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    let usecase = MainScheduleUseCase {
        repo: state.schedule_repo(),
    };
    let rows = usecase.execute().await?;
    let (jar, flash) = take_flash(jar, &state.cookies);
    let page = Page::new(
        "Schedule",
        ScheduleView {
            entries: rows.iter().map(ScheduleItemView::from).collect(),
        },
    )
    .viewer(Some(&user))
    .flash(flash);
    Ok((jar, render("main", &page)?).into_response())
}

// ── GET /presenter/{username} ────────────────────────────────────────────────

#[derive(Serialize)]
struct PresenterView {
    presenter: String,
    presentations: Vec<PresentationView>,
    entries: Vec<ScheduleItemView>,
}

pub async fn presenter(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(username): Path<String>,
) -> Result<Response, ConferenceError> {
    let usecase = PresenterPageUseCase {
        users: state.user_repo(),
        presentations: state.presentation_repo(),
        schedule: state.schedule_repo(),
    };
    let presenter = usecase.execute(&username).await?;
    let view = PresenterView {
        presenter: presenter.user.name,
        presentations: presenter
            .presentations
            .into_iter()
            .map(PresentationView::from)
            .collect(),
        entries: presenter
            .schedule
            .iter()
            .map(ScheduleItemView::from)
            .collect(),
    };
    let page = Page::new("Presenter", view).viewer(Some(&user));
    Ok(render("presenter", &page)?.into_response())
}
