use podium_domain::role::Scope;

use crate::domain::repository::{AuthorRepository, PresentationRepository, UserRepository};
use crate::domain::types::{AuthorLink, AuthorRow};
use crate::error::ConferenceError;

pub struct ListAuthorsUseCase<A: AuthorRepository> {
    pub repo: A,
}

impl<A: AuthorRepository> ListAuthorsUseCase<A> {
    pub async fn execute(&self) -> Result<Vec<AuthorRow>, ConferenceError> {
        self.repo.list().await
    }
}

pub struct LinkAuthorUseCase<A, U, P>
where
    A: AuthorRepository,
    U: UserRepository,
    P: PresentationRepository,
{
    pub authors: A,
    pub users: U,
    pub presentations: P,
}

impl<A, U, P> LinkAuthorUseCase<A, U, P>
where
    A: AuthorRepository,
    U: UserRepository,
    P: PresentationRepository,
{
    pub async fn execute(&self, link: AuthorLink) -> Result<(), ConferenceError> {
        if self.users.find_by_id(link.user_id).await?.is_none() {
            return Err(ConferenceError::UserNotFound);
        }
        if self
            .presentations
            .find(link.presentation_id, Scope::All)
            .await?
            .is_none()
        {
            return Err(ConferenceError::PresentationNotFound);
        }
        if self.authors.exists(link).await? {
            return Err(ConferenceError::AuthorAlreadyLinked);
        }
        self.authors.link(link).await
    }
}

pub struct UnlinkAuthorUseCase<A: AuthorRepository> {
    pub repo: A,
}

impl<A: AuthorRepository> UnlinkAuthorUseCase<A> {
    pub async fn execute(&self, link: AuthorLink) -> Result<(), ConferenceError> {
        if !self.repo.unlink(link).await? {
            return Err(ConferenceError::AuthorNotFound);
        }
        Ok(())
    }
}
