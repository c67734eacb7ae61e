use axum::Form;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use podium_session::cookie::take_flash;

use crate::error::ConferenceError;
use crate::handlers::redirect_with_flash;
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::templating::{Page, render};
use crate::usecase::room::{
    CreateRoomUseCase, DeleteRoomUseCase, GetRoomUseCase, ListRoomsUseCase, UpdateRoomUseCase,
};

const LIST_PATH: &str = "/admin/rooms";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RoomForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize)]
struct FormView<'a> {
    action: String,
    form: &'a RoomForm,
}

fn form_page(
    current: &CurrentUser,
    title: &str,
    action: String,
    form: &RoomForm,
) -> Result<Response, ConferenceError> {
    let page = Page::new(title, FormView { action, form }).viewer(Some(&current.0));
    Ok(render("admin/room_form", &page)?.into_response())
}

// ── GET /admin/rooms ─────────────────────────────────────────────────────────

#[derive(Serialize)]
struct RoomView {
    id: i32,
    label: String,
}

#[derive(Serialize)]
struct ListView {
    rooms: Vec<RoomView>,
}

pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    let usecase = ListRoomsUseCase {
        repo: state.room_repo(),
    };
    let rooms = usecase.execute().await?;
    let (jar, flash) = take_flash(jar, &state.cookies);
    let view = ListView {
        rooms: rooms
            .iter()
            .map(|r| RoomView {
                id: r.id,
                label: r.label(),
            })
            .collect(),
    };
    let page = Page::new("Rooms", view)
        .viewer(Some(&current.0))
        .flash(flash);
    Ok((jar, render("admin/rooms", &page)?).into_response())
}

// ── GET /admin/rooms/new ─────────────────────────────────────────────────────

pub async fn new_form(current: CurrentUser) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    form_page(
        &current,
        "New room",
        format!("{LIST_PATH}/new"),
        &RoomForm::default(),
    )
}

// ── POST /admin/rooms/new ────────────────────────────────────────────────────

pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    jar: CookieJar,
    Form(form): Form<RoomForm>,
) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    let usecase = CreateRoomUseCase {
        repo: state.room_repo(),
    };
    let room = usecase.execute(&form.name).await?;
    tracing::info!(room_id = room.id, "room created");
    Ok(redirect_with_flash(jar, &state, "Room saved.", LIST_PATH))
}

// ── GET /admin/rooms/{id}/edit ───────────────────────────────────────────────

pub async fn edit_form(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    let usecase = GetRoomUseCase {
        repo: state.room_repo(),
    };
    let room = usecase.execute(id).await?;
    let form = RoomForm {
        name: room.name.unwrap_or_default(),
    };
    form_page(&current, "Edit room", format!("{LIST_PATH}/{id}/edit"), &form)
}

// ── POST /admin/rooms/{id}/edit ──────────────────────────────────────────────

pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    jar: CookieJar,
    Form(form): Form<RoomForm>,
) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    let usecase = UpdateRoomUseCase {
        repo: state.room_repo(),
    };
    usecase.execute(id, &form.name).await?;
    Ok(redirect_with_flash(jar, &state, "Room saved.", LIST_PATH))
}

// ── POST /admin/rooms/{id}/delete ────────────────────────────────────────────

pub async fn delete(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    let usecase = DeleteRoomUseCase {
        repo: state.room_repo(),
    };
    usecase.execute(id).await?;
    tracing::info!(room_id = id, "room deleted");
    Ok(redirect_with_flash(jar, &state, "Room deleted.", LIST_PATH))
}
