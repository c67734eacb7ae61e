use anyhow::Context as _;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use podium_domain::role::Role;
use podium_session::cookie::{clear_session_cookie, set_session_cookie, take_flash};
use podium_session::token::issue_session_token;

use crate::error::ConferenceError;
use crate::handlers::redirect_with_flash;
use crate::session::MaybeUser;
use crate::state::AppState;
use crate::templating::{Blank, Page, render};
use crate::usecase::auth::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};

#[derive(Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

// ── GET /login ───────────────────────────────────────────────────────────────

pub async fn login_page(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    if user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }
    let (jar, flash) = take_flash(jar, &state.cookies);
    let page = Page::new("Log in", Blank::default()).flash(flash);
    Ok((jar, render("login", &page)?).into_response())
}

// ── POST /login ──────────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, ConferenceError> {
    let usecase = LoginUseCase {
        repo: state.user_repo(),
    };
    let input = LoginInput {
        name: form.name,
        password: form.password,
    };
    match usecase.execute(input).await {
        Ok(user) => {
            let (token, _) = issue_session_token(user.id, &state.session_secret)
                .context("issue session token")?;
            tracing::info!(user_id = user.id, "user logged in");
            let jar = set_session_cookie(jar, token, &state.cookies);
            Ok((jar, Redirect::to("/")).into_response())
        }
        Err(ConferenceError::InvalidCredentials) => Ok(redirect_with_flash(
            jar,
            &state,
            "Invalid username or password.",
            "/login",
        )),
        Err(e) => Err(e),
    }
}

// ── GET /logout ──────────────────────────────────────────────────────────────

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    (
        clear_session_cookie(jar, &state.cookies),
        Redirect::to("/"),
    )
        .into_response()
}

// ── GET /register ────────────────────────────────────────────────────────────

pub async fn register_page(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    jar: CookieJar,
) -> Result<Response, ConferenceError> {
    let (jar, flash) = take_flash(jar, &state.cookies);
    let page = Page::new("Register", Blank::default())
        .viewer(user.as_ref())
        .flash(flash);
    Ok((jar, render("register", &page)?).into_response())
}

// ── POST /register ───────────────────────────────────────────────────────────

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, ConferenceError> {
    let usecase = RegisterUseCase {
        repo: state.user_repo(),
    };
    let input = RegisterInput {
        name: form.name,
        password: form.password,
        role: Role::Presenter,
    };
    match usecase.execute(input).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "user registered");
            Ok(redirect_with_flash(
                jar,
                &state,
                "Registration successful. Please log in.",
                "/login",
            ))
        }
        Err(
            e @ (ConferenceError::InvalidUsername
            | ConferenceError::MissingPassword
            | ConferenceError::UserAlreadyExists),
        ) => Ok(redirect_with_flash(jar, &state, e.to_string(), "/register")),
        Err(e) => Err(e),
    }
}
