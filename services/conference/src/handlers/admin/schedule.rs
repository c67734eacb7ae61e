use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use podium_domain::role::Scope;
use podium_domain::schedule::input_start_time;
use podium_session::cookie::take_flash;

use crate::error::ConferenceError;
use crate::handlers::admin::{SelectOption, parse_id};
use crate::handlers::{ScheduleItemView, redirect_with_flash};
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::templating::{Page, render};
use crate::usecase::presentation::ListPresentationsUseCase;
use crate::usecase::room::ListRoomsUseCase;
use crate::usecase::schedule::{
    CreateScheduleEntryUseCase, DeleteScheduleEntryUseCase, GetScheduleEntryUseCase,
    ListScheduleUseCase, ScheduleInput, UpdateScheduleEntryUseCase,
};

const LIST_PATH: &str = "/admin/schedule";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScheduleForm {
    #[serde(default)]
    pub date_start: String,
    #[serde(default)]
    pub presentation_id: String,
    #[serde(default)]
    pub room_id: String,
}

impl ScheduleForm {
    fn to_input(&self) -> ScheduleInput {
        ScheduleInput {
            date_start: self.date_start.clone(),
            presentation_id: parse_id(&self.presentation_id),
            room_id: parse_id(&self.room_id),
        }
    }
}

/// Errors shown inline on the form: bad values, a busy room, or a selection
/// that no longer exists.
fn redisplays_form(e: &ConferenceError) -> bool {
    e.is_form_error()
        || matches!(
            e,
            ConferenceError::PresentationNotFound | ConferenceError::RoomNotFound
        )
}

#[derive(Serialize)]
struct FormView<'a> {
    action: String,
    form: &'a ScheduleForm,
    presentations: Vec<SelectOption>,
    rooms: Vec<SelectOption>,
}

async fn form_page(
    state: &AppState,
    current: &CurrentUser,
    scope: Scope,
    title: &str,
    action: String,
    form: &ScheduleForm,
    error: Option<&ConferenceError>,
) -> Result<Response, ConferenceError> {
    let presentations = ListPresentationsUseCase {
        repo: state.presentation_repo(),
    }
    .execute(scope)
    .await?;
    let rooms = ListRoomsUseCase {
        repo: state.room_repo(),
    }
    .execute()
    .await?;

    let selected_presentation = parse_id(&form.presentation_id);
    let selected_room = parse_id(&form.room_id);
    let view = FormView {
        action,
        form,
        presentations: presentations
            .into_iter()
            .map(|p| SelectOption::new(p.id, p.name, selected_presentation))
            .collect(),
        rooms: rooms
            .iter()
            .map(|r| SelectOption::new(r.id, r.label(), selected_room))
            .collect(),
    };
    let status = error.map_or(StatusCode::OK, ConferenceError::status);
    let page = Page::new(title, view)
        .viewer(Some(&current.0))
        .error(error);
    Ok((status, render("admin/schedule_form", &page)?).into_response())
}

// ── GET /admin/schedule ──────────────────────────────────────────────────────

#[derive(Serialize)]
struct ListView {
    entries: Vec<ScheduleItemView>,
}

pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    let scope = current.scope()?;
    let usecase = ListScheduleUseCase {
        repo: state.schedule_repo(),
    };
    let rows = usecase.execute(scope).await?;
    let (jar, flash) = take_flash(jar, &state.cookies);
    let page = Page::new(
        "Schedule",
        ListView {
            entries: rows.iter().map(ScheduleItemView::from).collect(),
        },
    )
    .viewer(Some(&current.0))
    .flash(flash);
    Ok((jar, render("admin/schedule", &page)?).into_response())
}

// ── GET /admin/schedule/new ──────────────────────────────────────────────────

pub async fn new_form(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Response, ConferenceError> {
    let scope = current.scope()?;
    form_page(
        &state,
        &current,
        scope,
        "New schedule entry",
        format!("{LIST_PATH}/new"),
        &ScheduleForm::default(),
        None,
    )
    .await
}

// ── POST /admin/schedule/new ─────────────────────────────────────────────────

pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    jar: CookieJar,
    Form(form): Form<ScheduleForm>,
) -> Result<Response, ConferenceError> {
    let scope = current.scope()?;
    let usecase = CreateScheduleEntryUseCase {
        schedule: state.schedule_repo(),
        presentations: state.presentation_repo(),
        rooms: state.room_repo(),
    };
    match usecase.execute(scope, form.to_input()).await {
        Ok(entry) => {
            tracing::info!(
                schedule_id = entry.id,
                room_id = entry.room_id,
                user_id = current.0.id,
                "schedule entry created"
            );
            Ok(redirect_with_flash(jar, &state, "Schedule entry saved.", LIST_PATH))
        }
        Err(e) if redisplays_form(&e) => {
            form_page(
                &state,
                &current,
                scope,
                "New schedule entry",
                format!("{LIST_PATH}/new"),
                &form,
                Some(&e),
            )
            .await
        }
        Err(e) => Err(e),
    }
}

// ── GET /admin/schedule/{id}/edit ────────────────────────────────────────────

pub async fn edit_form(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<Response, ConferenceError> {
    let scope = current.scope()?;
    let usecase = GetScheduleEntryUseCase {
        repo: state.schedule_repo(),
    };
    let entry = usecase.execute(id, scope).await?;
    let form = ScheduleForm {
        date_start: input_start_time(&entry.date_start),
        presentation_id: entry.presentation_id.to_string(),
        room_id: entry.room_id.to_string(),
    };
    form_page(
        &state,
        &current,
        scope,
        "Edit schedule entry",
        format!("{LIST_PATH}/{id}/edit"),
        &form,
        None,
    )
    .await
}

// ── POST /admin/schedule/{id}/edit ───────────────────────────────────────────

pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    jar: CookieJar,
    Form(form): Form<ScheduleForm>,
) -> Result<Response, ConferenceError> {
    let scope = current.scope()?;
    let usecase = UpdateScheduleEntryUseCase {
        schedule: state.schedule_repo(),
        presentations: state.presentation_repo(),
        rooms: state.room_repo(),
    };
    match usecase.execute(id, scope, form.to_input()).await {
        Ok(()) => Ok(redirect_with_flash(jar, &state, "Schedule entry saved.", LIST_PATH)),
        Err(e) if redisplays_form(&e) => {
            form_page(
                &state,
                &current,
                scope,
                "Edit schedule entry",
                format!("{LIST_PATH}/{id}/edit"),
                &form,
                Some(&e),
            )
            .await
        }
        Err(e) => Err(e),
    }
}

// ── POST /admin/schedule/{id}/delete ─────────────────────────────────────────

pub async fn delete(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    let scope = current.scope()?;
    let usecase = DeleteScheduleEntryUseCase {
        repo: state.schedule_repo(),
    };
    usecase.execute(id, scope).await?;
    tracing::info!(schedule_id = id, user_id = current.0.id, "schedule entry deleted");
    Ok(redirect_with_flash(jar, &state, "Schedule entry deleted.", LIST_PATH))
}
