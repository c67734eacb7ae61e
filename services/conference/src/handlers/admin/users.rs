use std::collections::HashMap;

use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use podium_session::cookie::take_flash;

use crate::domain::types::User;
use crate::error::ConferenceError;
use crate::handlers::admin::{SelectOption, parse_id};
use crate::handlers::redirect_with_flash;
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::templating::{Page, render};
use crate::usecase::user::{
    DeleteUserUseCase, GetUserUseCase, ListRolesUseCase, ListUsersUseCase, UpdateUserRoleUseCase,
};

const LIST_PATH: &str = "/admin/users";

// ── GET /admin/users ─────────────────────────────────────────────────────────

#[derive(Serialize)]
struct UserView {
    id: i32,
    name: String,
    role: String,
}

#[derive(Serialize)]
struct ListView {
    users: Vec<UserView>,
}

pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    let users = ListUsersUseCase {
        repo: state.user_repo(),
    }
    .execute()
    .await?;
    let role_names: HashMap<i32, String> = ListRolesUseCase {
        repo: state.role_repo(),
    }
    .execute()
    .await?
    .into_iter()
    .map(|r| (r.id, r.name))
    .collect();

    let view = ListView {
        users: users
            .into_iter()
            .map(|u| UserView {
                role: u
                    .role_id
                    .and_then(|id| role_names.get(&id).cloned())
                    .unwrap_or_default(),
                id: u.id,
                name: u.name,
            })
            .collect(),
    };
    let (jar, flash) = take_flash(jar, &state.cookies);
    let page = Page::new("Users", view)
        .viewer(Some(&current.0))
        .flash(flash);
    Ok((jar, render("admin/users", &page)?).into_response())
}

// ── GET /admin/users/{id}/edit ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UserRoleForm {
    #[serde(default)]
    pub role_id: String,
}

#[derive(Serialize)]
struct FormView {
    action: String,
    user_name: String,
    roles: Vec<SelectOption>,
}

async fn form_page(
    state: &AppState,
    current: &CurrentUser,
    user: User,
    selected: Option<i32>,
    error: Option<&ConferenceError>,
) -> Result<Response, ConferenceError> {
    let roles = ListRolesUseCase {
        repo: state.role_repo(),
    }
    .execute()
    .await?;
    let view = FormView {
        action: format!("{LIST_PATH}/{}/edit", user.id),
        user_name: user.name,
        roles: roles
            .into_iter()
            .map(|r| SelectOption::new(r.id, r.name, selected))
            .collect(),
    };
    let status = error.map_or(StatusCode::OK, ConferenceError::status);
    let page = Page::new("Edit user", view)
        .viewer(Some(&current.0))
        .error(error);
    Ok((status, render("admin/user_form", &page)?).into_response())
}

pub async fn edit_form(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    let user = GetUserUseCase {
        repo: state.user_repo(),
    }
    .execute(id)
    .await?;
    let selected = user.role_id;
    form_page(&state, &current, user, selected, None).await
}

// ── POST /admin/users/{id}/edit ──────────────────────────────────────────────

pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    jar: CookieJar,
    Form(form): Form<UserRoleForm>,
) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    let raw = form.role_id.trim();
    let role_id = if raw.is_empty() { None } else { parse_id(raw) };
    let result = if !raw.is_empty() && role_id.is_none() {
        Err(ConferenceError::MissingData)
    } else {
        UpdateUserRoleUseCase {
            users: state.user_repo(),
            roles: state.role_repo(),
        }
        .execute(id, role_id)
        .await
    };
    match result {
        Ok(()) => Ok(redirect_with_flash(jar, &state, "User saved.", LIST_PATH)),
        Err(e) if e.is_form_error() => {
            let user = GetUserUseCase {
                repo: state.user_repo(),
            }
            .execute(id)
            .await?;
            form_page(&state, &current, user, role_id, Some(&e)).await
        }
        Err(e) => Err(e),
    }
}

// ── POST /admin/users/{id}/delete ────────────────────────────────────────────

pub async fn delete(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(current.0.id, id).await?;
    tracing::info!(user_id = id, actor_id = current.0.id, "user deleted");
    Ok(redirect_with_flash(jar, &state, "User deleted.", LIST_PATH))
}
