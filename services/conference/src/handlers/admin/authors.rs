use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use podium_domain::role::Scope;
use podium_session::cookie::take_flash;

use crate::domain::types::AuthorLink;
use crate::error::ConferenceError;
use crate::handlers::admin::{SelectOption, parse_id};
use crate::handlers::redirect_with_flash;
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::templating::{Page, render};
use crate::usecase::author::{ListAuthorsUseCase, LinkAuthorUseCase, UnlinkAuthorUseCase};
use crate::usecase::presentation::ListPresentationsUseCase;
use crate::usecase::user::ListUsersUseCase;

const LIST_PATH: &str = "/admin/authors";

// ── GET /admin/authors ───────────────────────────────────────────────────────

#[derive(Serialize)]
struct AuthorView {
    presentation_id: i32,
    user_id: i32,
    presentation: String,
    user: String,
}

#[derive(Serialize)]
struct ListView {
    authors: Vec<AuthorView>,
}

pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    let usecase = ListAuthorsUseCase {
        repo: state.author_repo(),
    };
    let rows = usecase.execute().await?;
    let view = ListView {
        authors: rows
            .into_iter()
            .map(|row| AuthorView {
                presentation_id: row.link.presentation_id,
                user_id: row.link.user_id,
                presentation: row.presentation_name,
                user: row.user_name,
            })
            .collect(),
    };
    let (jar, flash) = take_flash(jar, &state.cookies);
    let page = Page::new("Authors", view)
        .viewer(Some(&current.0))
        .flash(flash);
    Ok((jar, render("admin/authors", &page)?).into_response())
}

// ── GET /admin/authors/new ───────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct AuthorForm {
    #[serde(default)]
    pub presentation_id: String,
    #[serde(default)]
    pub user_id: String,
}

#[derive(Serialize)]
struct FormView {
    presentations: Vec<SelectOption>,
    users: Vec<SelectOption>,
}

async fn form_page(
    state: &AppState,
    current: &CurrentUser,
    form: &AuthorForm,
    error: Option<&ConferenceError>,
) -> Result<Response, ConferenceError> {
    let presentations = ListPresentationsUseCase {
        repo: state.presentation_repo(),
    }
    .execute(Scope::All)
    .await?;
    let users = ListUsersUseCase {
        repo: state.user_repo(),
    }
    .execute()
    .await?;

    let selected_presentation = parse_id(&form.presentation_id);
    let selected_user = parse_id(&form.user_id);
    let view = FormView {
        presentations: presentations
            .into_iter()
            .map(|p| SelectOption::new(p.id, p.name, selected_presentation))
            .collect(),
        users: users
            .into_iter()
            .map(|u| SelectOption::new(u.id, u.name, selected_user))
            .collect(),
    };
    let status = error.map_or(StatusCode::OK, ConferenceError::status);
    let page = Page::new("Link an author", view)
        .viewer(Some(&current.0))
        .error(error);
    Ok((status, render("admin/author_form", &page)?).into_response())
}

pub async fn new_form(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    form_page(&state, &current, &AuthorForm::default(), None).await
}

// ── POST /admin/authors/new ──────────────────────────────────────────────────

pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    jar: CookieJar,
    Form(form): Form<AuthorForm>,
) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    let result = match (parse_id(&form.presentation_id), parse_id(&form.user_id)) {
        (Some(presentation_id), Some(user_id)) => {
            let usecase = LinkAuthorUseCase {
                authors: state.author_repo(),
                users: state.user_repo(),
                presentations: state.presentation_repo(),
            };
            usecase
                .execute(AuthorLink {
                    presentation_id,
                    user_id,
                })
                .await
        }
        _ => Err(ConferenceError::MissingData),
    };
    match result {
        Ok(()) => Ok(redirect_with_flash(jar, &state, "Author linked.", LIST_PATH)),
        Err(e)
            if e.is_form_error()
                || matches!(
                    e,
                    ConferenceError::UserNotFound | ConferenceError::PresentationNotFound
                ) =>
        {
            form_page(&state, &current, &form, Some(&e)).await
        }
        Err(e) => Err(e),
    }
}

// ── POST /admin/authors/{presentation_id}/{user_id}/delete ───────────────────

pub async fn delete(
    State(state): State<AppState>,
    current: CurrentUser,
    Path((presentation_id, user_id)): Path<(i32, i32)>,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    current.require_admin()?;
    let usecase = UnlinkAuthorUseCase {
        repo: state.author_repo(),
    };
    usecase
        .execute(AuthorLink {
            presentation_id,
            user_id,
        })
        .await?;
    Ok(redirect_with_flash(jar, &state, "Author unlinked.", LIST_PATH))
}
