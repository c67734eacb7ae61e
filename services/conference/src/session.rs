//! Session extractors.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use podium_domain::role::Scope;
use podium_session::cookie::session_token;
use podium_session::token::validate_session_token;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::ConferenceError;
use crate::state::AppState;

/// Logged-in user, re-read from the database on every request so role
/// changes and deletions apply immediately.
///
/// Rejects with `303 See Other` to `/login` when there is no valid session.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// Row filter for the admin views. Users without a known role get 403.
    pub fn scope(&self) -> Result<Scope, ConferenceError> {
        self.0.scope().ok_or(ConferenceError::Forbidden)
    }

    pub fn require_admin(&self) -> Result<(), ConferenceError> {
        if self.0.is_admin() {
            Ok(())
        } else {
            Err(ConferenceError::Forbidden)
        }
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    // Same shape as the other extractors: read the cookie synchronously, then
    // return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = session_token(&CookieJar::from_headers(&parts.headers));
        let state = state.clone();

        async move {
            match load_session_user(&state, token).await {
                Ok(Some(user)) => Ok(Self(user)),
                Ok(None) => Err(Redirect::to("/login").into_response()),
                Err(e) => Err(e.into_response()),
            }
        }
    }
}

/// Like [`CurrentUser`] but never rejects; for public pages.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<User>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = session_token(&CookieJar::from_headers(&parts.headers));
        let state = state.clone();

        async move {
            match load_session_user(&state, token).await {
                Ok(user) => Ok(Self(user)),
                Err(e) => {
                    tracing::warn!(error = ?e, "failed to load session user");
                    Ok(Self(None))
                }
            }
        }
    }
}

async fn load_session_user(
    state: &AppState,
    token: Option<String>,
) -> Result<Option<User>, ConferenceError> {
    let Some(token) = token else {
        return Ok(None);
    };
    let info = match validate_session_token(&token, &state.session_secret) {
        Ok(info) => info,
        Err(e) => {
            tracing::debug!(error = %e, "rejected session token");
            return Ok(None);
        }
    };
    state.user_repo().find_by_id(info.user_id).await
}
