use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ConferenceError;
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::templating::{Page, render};
use crate::usecase::user::ListRolesUseCase;

#[derive(Serialize)]
struct RoleView {
    id: i32,
    name: String,
}

#[derive(Serialize)]
struct ListView {
    roles: Vec<RoleView>,
}

// ── GET /admin/roles ─────────────────────────────────────────────────────────

pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    let usecase = ListRolesUseCase {
        repo: state.role_repo(),
    };
    let roles = usecase.execute().await?;
    let view = ListView {
        roles: roles
            .into_iter()
            .map(|r| RoleView {
                id: r.id,
                name: r.name,
            })
            .collect(),
    };
    let page = Page::new("Roles", view).viewer(Some(&current.0));
    Ok(render("admin/roles", &page)?.into_response())
}
