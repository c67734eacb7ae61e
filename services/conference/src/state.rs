use std::sync::Arc;

use sea_orm::DatabaseConnection;

use podium_session::cookie::CookieSettings;

use crate::infra::db::{
    DbAuthorRepository, DbPresentationRepository, DbRoleRepository, DbRoomRepository,
    DbScheduleRepository, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// HMAC secret for session tokens.
    pub session_secret: Arc<str>,
    pub cookies: CookieSettings,
}

impl AppState {
    pub fn new(db: DatabaseConnection, session_secret: &str, cookies: CookieSettings) -> Self {
        Self {
            db,
            session_secret: Arc::from(session_secret),
            cookies,
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn role_repo(&self) -> DbRoleRepository {
        DbRoleRepository {
            db: self.db.clone(),
        }
    }

    pub fn room_repo(&self) -> DbRoomRepository {
        DbRoomRepository {
            db: self.db.clone(),
        }
    }

    pub fn presentation_repo(&self) -> DbPresentationRepository {
        DbPresentationRepository {
            db: self.db.clone(),
        }
    }

    pub fn schedule_repo(&self) -> DbScheduleRepository {
        DbScheduleRepository {
            db: self.db.clone(),
        }
    }

    pub fn author_repo(&self) -> DbAuthorRepository {
        DbAuthorRepository {
            db: self.db.clone(),
        }
    }
}
