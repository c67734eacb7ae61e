use crate::domain::repository::{RoleRepository, UserRepository};
use crate::domain::types::{RoleRecord, User};
use crate::error::ConferenceError;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, ConferenceError> {
        self.repo.list().await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<User, ConferenceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ConferenceError::UserNotFound)
    }
}

// ── UpdateUserRole ───────────────────────────────────────────────────────────

pub struct UpdateUserRoleUseCase<U: UserRepository, R: RoleRepository> {
    pub users: U,
    pub roles: R,
}

impl<U: UserRepository, R: RoleRepository> UpdateUserRoleUseCase<U, R> {
    /// `None` removes the role, which locks the user out of the admin views.
    pub async fn execute(&self, id: i32, role_id: Option<i32>) -> Result<(), ConferenceError> {
        if let Some(role_id) = role_id {
            if self.roles.find_by_id(role_id).await?.is_none() {
                return Err(ConferenceError::MissingData);
            }
        }
        if !self.users.update_role(id, role_id).await? {
            return Err(ConferenceError::UserNotFound);
        }
        tracing::info!(user_id = id, ?role_id, "user role changed");
        Ok(())
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    /// Administrators cannot delete their own account.
    pub async fn execute(&self, actor_id: i32, id: i32) -> Result<(), ConferenceError> {
        if actor_id == id {
            return Err(ConferenceError::Forbidden);
        }
        if !self.repo.delete(id).await? {
            return Err(ConferenceError::UserNotFound);
        }
        Ok(())
    }
}

// ── ListRoles ────────────────────────────────────────────────────────────────

pub struct ListRolesUseCase<R: RoleRepository> {
    pub repo: R,
}

impl<R: RoleRepository> ListRolesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<RoleRecord>, ConferenceError> {
        self.repo.list().await
    }
}
