#![allow(async_fn_in_trait)]

use chrono::NaiveDateTime;

use podium_domain::role::Scope;

use crate::domain::types::{
    AuthorLink, AuthorRow, NewUser, Presentation, PresentationDraft, RoleRecord, Room,
    ScheduleEntry, ScheduleRow, ScheduleSlot, User,
};
use crate::error::ConferenceError;

/// Repository for accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ConferenceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, ConferenceError>;
    async fn list(&self) -> Result<Vec<User>, ConferenceError>;
    /// Fails with `UserAlreadyExists` when the name is taken.
    async fn create(&self, user: &NewUser) -> Result<User, ConferenceError>;
    /// Returns `false` if no such user exists.
    async fn update_role(&self, id: i32, role_id: Option<i32>) -> Result<bool, ConferenceError>;
    /// Returns `false` if no such user exists.
    async fn delete(&self, id: i32) -> Result<bool, ConferenceError>;
}

/// Read-only access to the seeded roles.
pub trait RoleRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<RoleRecord>, ConferenceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<RoleRecord>, ConferenceError>;
}

pub trait RoomRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Room>, ConferenceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Room>, ConferenceError>;
    async fn create(&self, name: Option<&str>) -> Result<Room, ConferenceError>;
    async fn update(&self, id: i32, name: Option<&str>) -> Result<bool, ConferenceError>;
    async fn delete(&self, id: i32) -> Result<bool, ConferenceError>;
}

/// Presentations, filtered by [`Scope`] on every read.
pub trait PresentationRepository: Send + Sync {
    async fn list(&self, scope: Scope) -> Result<Vec<Presentation>, ConferenceError>;
    async fn find(&self, id: i32, scope: Scope) -> Result<Option<Presentation>, ConferenceError>;
    /// Insert the presentation and, when `author` is set, its author link in
    /// one transaction.
    async fn create(
        &self,
        draft: &PresentationDraft,
        author: Option<i32>,
    ) -> Result<Presentation, ConferenceError>;
    async fn update(&self, id: i32, draft: &PresentationDraft) -> Result<bool, ConferenceError>;
    async fn delete(&self, id: i32) -> Result<bool, ConferenceError>;
}

/// Schedule entries, filtered by [`Scope`] on every read.
pub trait ScheduleRepository: Send + Sync {
    /// Ordered by start time, then room.
    async fn list(&self, scope: Scope) -> Result<Vec<ScheduleRow>, ConferenceError>;
    async fn find(&self, id: i32, scope: Scope) -> Result<Option<ScheduleEntry>, ConferenceError>;
    /// Whether another entry already occupies `room_id` at exactly
    /// `date_start`. `exclude` skips the entry being edited.
    async fn is_room_busy(
        &self,
        room_id: i32,
        date_start: NaiveDateTime,
        exclude: Option<i32>,
    ) -> Result<bool, ConferenceError>;
    /// Fails with `RoomBusy` when the slot is taken.
    async fn create(&self, slot: &ScheduleSlot) -> Result<ScheduleEntry, ConferenceError>;
    /// Fails with `RoomBusy` when the slot is taken by another entry.
    async fn update(&self, id: i32, slot: &ScheduleSlot) -> Result<bool, ConferenceError>;
    async fn delete(&self, id: i32) -> Result<bool, ConferenceError>;
}

/// The user/presentation join table.
pub trait AuthorRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<AuthorRow>, ConferenceError>;
    async fn exists(&self, link: AuthorLink) -> Result<bool, ConferenceError>;
    /// Fails with `AuthorAlreadyLinked` when the pair exists.
    async fn link(&self, link: AuthorLink) -> Result<(), ConferenceError>;
    async fn unlink(&self, link: AuthorLink) -> Result<bool, ConferenceError>;
}
