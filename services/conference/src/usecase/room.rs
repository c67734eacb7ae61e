use crate::domain::repository::RoomRepository;
use crate::domain::types::Room;
use crate::error::ConferenceError;

/// Rooms may be unnamed; blank input is stored as NULL.
fn normalize_name(name: &str) -> Option<&str> {
    let name = name.trim();
    (!name.is_empty()).then_some(name)
}

pub struct ListRoomsUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> ListRoomsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Room>, ConferenceError> {
        self.repo.list().await
    }
}

pub struct GetRoomUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> GetRoomUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Room, ConferenceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ConferenceError::RoomNotFound)
    }
}

pub struct CreateRoomUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> CreateRoomUseCase<R> {
    pub async fn execute(&self, name: &str) -> Result<Room, ConferenceError> {
        self.repo.create(normalize_name(name)).await
    }
}

pub struct UpdateRoomUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> UpdateRoomUseCase<R> {
    pub async fn execute(&self, id: i32, name: &str) -> Result<(), ConferenceError> {
        if !self.repo.update(id, normalize_name(name)).await? {
            return Err(ConferenceError::RoomNotFound);
        }
        Ok(())
    }
}

pub struct DeleteRoomUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> DeleteRoomUseCase<R> {
    /// Schedule entries in the room go with it (FK cascade).
    pub async fn execute(&self, id: i32) -> Result<(), ConferenceError> {
        if !self.repo.delete(id).await? {
            return Err(ConferenceError::RoomNotFound);
        }
        Ok(())
    }
}
