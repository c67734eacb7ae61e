use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::templating::render_error_page;

/// Conference service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ConferenceError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("invalid username")]
    InvalidUsername,
    #[error("password must not be empty")]
    MissingPassword,
    #[error("missing data")]
    MissingData,
    #[error("invalid start time")]
    InvalidStartTime,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("room is busy")]
    RoomBusy,
    #[error("author already linked")]
    AuthorAlreadyLinked,
    #[error("user not found")]
    UserNotFound,
    #[error("room not found")]
    RoomNotFound,
    #[error("presentation not found")]
    PresentationNotFound,
    #[error("schedule entry not found")]
    ScheduleNotFound,
    #[error("author not found")]
    AuthorNotFound,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ConferenceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::MissingPassword => "MISSING_PASSWORD",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidStartTime => "INVALID_START_TIME",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::RoomBusy => "ROOM_BUSY",
            Self::AuthorAlreadyLinked => "AUTHOR_ALREADY_LINKED",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::PresentationNotFound => "PRESENTATION_NOT_FOUND",
            Self::ScheduleNotFound => "SCHEDULE_NOT_FOUND",
            Self::AuthorNotFound => "AUTHOR_NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidUsername
            | Self::MissingPassword
            | Self::MissingData
            | Self::InvalidStartTime => StatusCode::BAD_REQUEST,
            Self::UserAlreadyExists | Self::RoomBusy | Self::AuthorAlreadyLinked => {
                StatusCode::CONFLICT
            }
            Self::UserNotFound
            | Self::RoomNotFound
            | Self::PresentationNotFound
            | Self::ScheduleNotFound
            | Self::AuthorNotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Errors caused by submitted form values. Admin forms re-render with
    /// the message instead of showing the error page.
    pub fn is_form_error(&self) -> bool {
        matches!(
            self.status(),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT
        )
    }
}

impl IntoResponse for ConferenceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = render_error_page(status, &self.to_string());
        let mut response = (status, Html(body)).into_response();
        response
            .headers_mut()
            .insert(ERROR_KIND_HEADER, HeaderValue::from_static(self.kind()));
        response
    }
}

/// Response header carrying [`ConferenceError::kind`].
pub const ERROR_KIND_HEADER: &str = "x-podium-error";
