use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use podium_session::cookie::take_flash;

use crate::error::ConferenceError;
use crate::handlers::{PresentationView, redirect_with_flash};
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::templating::{Page, render};
use crate::usecase::presentation::{
    CreatePresentationUseCase, DeletePresentationUseCase, GetPresentationUseCase,
    ListPresentationsUseCase, PresentationInput, UpdatePresentationUseCase,
};

const LIST_PATH: &str = "/admin/presentations";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PresentationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
}

impl PresentationForm {
    fn to_input(&self) -> PresentationInput {
        PresentationInput {
            name: self.name.clone(),
            text: self.text.clone(),
        }
    }
}

#[derive(Serialize)]
struct FormView<'a> {
    action: String,
    form: &'a PresentationForm,
}

fn form_page(
    current: &CurrentUser,
    title: &str,
    action: String,
    form: &PresentationForm,
    error: Option<&ConferenceError>,
) -> Result<Response, ConferenceError> {
    let status = error.map_or(StatusCode::OK, ConferenceError::status);
    let page = Page::new(title, FormView { action, form })
        .viewer(Some(&current.0))
        .error(error);
    Ok((status, render("admin/presentation_form", &page)?).into_response())
}

// ── GET /admin/presentations ─────────────────────────────────────────────────

#[derive(Serialize)]
struct ListView {
    presentations: Vec<PresentationView>,
}

pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    let scope = current.scope()?;
    let usecase = ListPresentationsUseCase {
        repo: state.presentation_repo(),
    };
    let presentations = usecase.execute(scope).await?;
    let (jar, flash) = take_flash(jar, &state.cookies);
    let page = Page::new(
        "Presentations",
        ListView {
            presentations: presentations
                .into_iter()
                .map(PresentationView::from)
                .collect(),
        },
    )
    .viewer(Some(&current.0))
    .flash(flash);
    Ok((jar, render("admin/presentations", &page)?).into_response())
}

// ── GET /admin/presentations/new ─────────────────────────────────────────────

pub async fn new_form(current: CurrentUser) -> Result<Response, ConferenceError> {
    current.scope()?;
    form_page(
        &current,
        "New presentation",
        format!("{LIST_PATH}/new"),
        &PresentationForm::default(),
        None,
    )
}

// ── POST /admin/presentations/new ────────────────────────────────────────────

pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    jar: CookieJar,
    Form(form): Form<PresentationForm>,
) -> Result<Response, ConferenceError> {
    let scope = current.scope()?;
    let usecase = CreatePresentationUseCase {
        repo: state.presentation_repo(),
    };
    match usecase.execute(scope, form.to_input()).await {
        Ok(presentation) => {
            tracing::info!(
                presentation_id = presentation.id,
                user_id = current.0.id,
                "presentation created"
            );
            Ok(redirect_with_flash(jar, &state, "Presentation saved.", LIST_PATH))
        }
        Err(e) if e.is_form_error() => form_page(
            &current,
            "New presentation",
            format!("{LIST_PATH}/new"),
            &form,
            Some(&e),
        ),
        Err(e) => Err(e),
    }
}

// ── GET /admin/presentations/{id}/edit ───────────────────────────────────────

pub async fn edit_form(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<Response, ConferenceError> {
    let scope = current.scope()?;
    let usecase = GetPresentationUseCase {
        repo: state.presentation_repo(),
    };
    let presentation = usecase.execute(id, scope).await?;
    let form = PresentationForm {
        name: presentation.name,
        text: presentation.text.unwrap_or_default(),
    };
    form_page(
        &current,
        "Edit presentation",
        format!("{LIST_PATH}/{id}/edit"),
        &form,
        None,
    )
}

// ── POST /admin/presentations/{id}/edit ──────────────────────────────────────

pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    jar: CookieJar,
    Form(form): Form<PresentationForm>,
) -> Result<Response, ConferenceError> {
    let scope = current.scope()?;
    let usecase = UpdatePresentationUseCase {
        repo: state.presentation_repo(),
    };
    match usecase.execute(id, scope, form.to_input()).await {
        Ok(()) => Ok(redirect_with_flash(jar, &state, "Presentation saved.", LIST_PATH)),
        Err(e) if e.is_form_error() => form_page(
            &current,
            "Edit presentation",
            format!("{LIST_PATH}/{id}/edit"),
            &form,
            Some(&e),
        ),
        Err(e) => Err(e),
    }
}

// ── POST /admin/presentations/{id}/delete ────────────────────────────────────

pub async fn delete(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    let scope = current.scope()?;
    let usecase = DeletePresentationUseCase {
        repo: state.presentation_repo(),
    };
    usecase.execute(id, scope).await?;
    tracing::info!(presentation_id = id, user_id = current.0.id, "presentation deleted");
    Ok(redirect_with_flash(jar, &state, "Presentation deleted.", LIST_PATH))
}
