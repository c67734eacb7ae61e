use once_cell::sync::Lazy;
use podium_domain::role::Role;
use podium_domain::user::validate_username;

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::error::ConferenceError;
use crate::password::{hash_password, verify_password};

// ── Login ────────────────────────────────────────────────────────────────────

/// Hash verified against when the name lookup misses, so unknown names cost
/// the same Argon2 work as wrong passwords.
static DUMMY_PASSWORD_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("podium-unknown-user").ok());

pub struct LoginInput {
    pub name: String,
    pub password: String,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> LoginUseCase<R> {
    /// Unknown names and wrong passwords fail the same way.
    pub async fn execute(&self, input: LoginInput) -> Result<User, ConferenceError> {
        let Some(user) = self.repo.find_by_name(input.name.trim()).await? else {
            if let Some(hash) = DUMMY_PASSWORD_HASH.as_deref() {
                let _ = verify_password(&input.password, hash);
            }
            return Err(ConferenceError::InvalidCredentials);
        };
        let matches = verify_password(&input.password, &user.password_hash).map_err(|e| {
            ConferenceError::Internal(anyhow::anyhow!("verify password for user {}: {e}", user.id))
        })?;
        if !matches {
            return Err(ConferenceError::InvalidCredentials);
        }
        Ok(user)
    }
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub name: String,
    pub password: String,
    pub role: Role,
}

/// Creates an account. The public registration form always passes
/// [`Role::Presenter`]; the `create-user` command may pass any role.
pub struct RegisterUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUseCase<R> {
    pub async fn execute(&self, input: RegisterInput) -> Result<User, ConferenceError> {
        let name = input.name.trim();
        if !validate_username(name) {
            return Err(ConferenceError::InvalidUsername);
        }
        if input.password.is_empty() {
            return Err(ConferenceError::MissingPassword);
        }
        if self.repo.find_by_name(name).await?.is_some() {
            return Err(ConferenceError::UserAlreadyExists);
        }
        let password_hash = hash_password(&input.password)
            .map_err(|e| ConferenceError::Internal(anyhow::anyhow!("hash password: {e}")))?;
        self.repo
            .create(&NewUser {
                name: name.to_owned(),
                password_hash,
                role_id: Some(input.role.id()),
            })
            .await
    }
}
