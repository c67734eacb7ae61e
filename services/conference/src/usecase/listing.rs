//! Read-only pages outside the admin area.

use podium_domain::role::Scope;

use crate::domain::repository::{PresentationRepository, ScheduleRepository, UserRepository};
use crate::domain::types::{Presentation, ScheduleRow, User};
use crate::error::ConferenceError;

// ── Full schedule (/main) ────────────────────────────────────────────────────

pub struct MainScheduleUseCase<S: ScheduleRepository> {
    pub repo: S,
}

impl<S: ScheduleRepository> MainScheduleUseCase<S> {
    pub async fn execute(&self) -> Result<Vec<ScheduleRow>, ConferenceError> {
        self.repo.list(Scope::All).await
    }
}

// ── Presenter page (/presenter/{username}) ───────────────────────────────────

pub struct PresenterPage {
    pub user: User,
    pub presentations: Vec<Presentation>,
    pub schedule: Vec<ScheduleRow>,
}

pub struct PresenterPageUseCase<U, P, S>
where
    U: UserRepository,
    P: PresentationRepository,
    S: ScheduleRepository,
{
    pub users: U,
    pub presentations: P,
    pub schedule: S,
}

impl<U, P, S> PresenterPageUseCase<U, P, S>
where
    U: UserRepository,
    P: PresentationRepository,
    S: ScheduleRepository,
{
    pub async fn execute(&self, username: &str) -> Result<PresenterPage, ConferenceError> {
        let user = self
            .users
            .find_by_name(username)
            .await?
            .ok_or(ConferenceError::UserNotFound)?;
        let scope = Scope::AuthoredBy(user.id);
        let presentations = self.presentations.list(scope).await?;
        let schedule = self.schedule.list(scope).await?;
        Ok(PresenterPage {
            user,
            presentations,
            schedule,
        })
    }
}
