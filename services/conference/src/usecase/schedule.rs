use podium_domain::role::Scope;
use podium_domain::schedule::parse_start_time;

use crate::domain::repository::{PresentationRepository, RoomRepository, ScheduleRepository};
use crate::domain::types::{ScheduleEntry, ScheduleRow, ScheduleSlot};
use crate::error::ConferenceError;

/// Raw schedule form values.
pub struct ScheduleInput {
    pub date_start: String,
    pub presentation_id: Option<i32>,
    pub room_id: Option<i32>,
}

/// Validate the form values and resolve them against what `scope` may see.
async fn resolve_slot<P, R>(
    presentations: &P,
    rooms: &R,
    scope: Scope,
    input: ScheduleInput,
) -> Result<ScheduleSlot, ConferenceError>
where
    P: PresentationRepository,
    R: RoomRepository,
{
    let (Some(presentation_id), Some(room_id)) = (input.presentation_id, input.room_id) else {
        return Err(ConferenceError::MissingData);
    };
    let date_start =
        parse_start_time(&input.date_start).map_err(|_| ConferenceError::InvalidStartTime)?;
    if presentations.find(presentation_id, scope).await?.is_none() {
        return Err(ConferenceError::PresentationNotFound);
    }
    if rooms.find_by_id(room_id).await?.is_none() {
        return Err(ConferenceError::RoomNotFound);
    }
    Ok(ScheduleSlot {
        date_start,
        presentation_id,
        room_id,
    })
}

/// Reject the slot when another entry holds the same room at the exact same
/// start time.
async fn ensure_room_free<S: ScheduleRepository>(
    schedule: &S,
    slot: &ScheduleSlot,
    exclude: Option<i32>,
) -> Result<(), ConferenceError> {
    if schedule
        .is_room_busy(slot.room_id, slot.date_start, exclude)
        .await?
    {
        tracing::info!(
            room_id = slot.room_id,
            date_start = %slot.date_start,
            "room is busy"
        );
        return Err(ConferenceError::RoomBusy);
    }
    Ok(())
}

// ── ListSchedule ─────────────────────────────────────────────────────────────

pub struct ListScheduleUseCase<S: ScheduleRepository> {
    pub repo: S,
}

impl<S: ScheduleRepository> ListScheduleUseCase<S> {
    pub async fn execute(&self, scope: Scope) -> Result<Vec<ScheduleRow>, ConferenceError> {
        self.repo.list(scope).await
    }
}

// ── GetScheduleEntry ─────────────────────────────────────────────────────────

pub struct GetScheduleEntryUseCase<S: ScheduleRepository> {
    pub repo: S,
}

impl<S: ScheduleRepository> GetScheduleEntryUseCase<S> {
    pub async fn execute(&self, id: i32, scope: Scope) -> Result<ScheduleEntry, ConferenceError> {
        self.repo
            .find(id, scope)
            .await?
            .ok_or(ConferenceError::ScheduleNotFound)
    }
}

// ── CreateScheduleEntry ──────────────────────────────────────────────────────

pub struct CreateScheduleEntryUseCase<S, P, R>
where
    S: ScheduleRepository,
    P: PresentationRepository,
    R: RoomRepository,
{
    pub schedule: S,
    pub presentations: P,
    pub rooms: R,
}

impl<S, P, R> CreateScheduleEntryUseCase<S, P, R>
where
    S: ScheduleRepository,
    P: PresentationRepository,
    R: RoomRepository,
{
    pub async fn execute(
        &self,
        scope: Scope,
        input: ScheduleInput,
    ) -> Result<ScheduleEntry, ConferenceError> {
        let slot = resolve_slot(&self.presentations, &self.rooms, scope, input).await?;
        ensure_room_free(&self.schedule, &slot, None).await?;
        self.schedule.create(&slot).await
    }
}

// ── UpdateScheduleEntry ──────────────────────────────────────────────────────

pub struct UpdateScheduleEntryUseCase<S, P, R>
where
    S: ScheduleRepository,
    P: PresentationRepository,
    R: RoomRepository,
{
    pub schedule: S,
    pub presentations: P,
    pub rooms: R,
}

impl<S, P, R> UpdateScheduleEntryUseCase<S, P, R>
where
    S: ScheduleRepository,
    P: PresentationRepository,
    R: RoomRepository,
{
    /// The entry is excluded from its own availability check, so re-saving
    /// an unchanged slot succeeds.
    pub async fn execute(
        &self,
        id: i32,
        scope: Scope,
        input: ScheduleInput,
    ) -> Result<(), ConferenceError> {
        if self.schedule.find(id, scope).await?.is_none() {
            return Err(ConferenceError::ScheduleNotFound);
        }
        let slot = resolve_slot(&self.presentations, &self.rooms, scope, input).await?;
        ensure_room_free(&self.schedule, &slot, Some(id)).await?;
        if !self.schedule.update(id, &slot).await? {
            return Err(ConferenceError::ScheduleNotFound);
        }
        Ok(())
    }
}

// ── DeleteScheduleEntry ──────────────────────────────────────────────────────

pub struct DeleteScheduleEntryUseCase<S: ScheduleRepository> {
    pub repo: S,
}

impl<S: ScheduleRepository> DeleteScheduleEntryUseCase<S> {
    pub async fn execute(&self, id: i32, scope: Scope) -> Result<(), ConferenceError> {
        if self.repo.find(id, scope).await?.is_none() {
            return Err(ConferenceError::ScheduleNotFound);
        }
        if !self.repo.delete(id).await? {
            return Err(ConferenceError::ScheduleNotFound);
        }
        Ok(())
    }
}
