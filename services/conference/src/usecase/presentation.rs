use podium_domain::role::Scope;

use crate::domain::repository::PresentationRepository;
use crate::domain::types::{Presentation, PresentationDraft};
use crate::error::ConferenceError;

pub struct PresentationInput {
    pub name: String,
    pub text: String,
}

impl PresentationInput {
    /// Name is required; blank text is stored as NULL.
    fn into_draft(self) -> Result<PresentationDraft, ConferenceError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ConferenceError::MissingData);
        }
        let text = self.text.trim();
        Ok(PresentationDraft {
            name: name.to_owned(),
            text: (!text.is_empty()).then(|| text.to_owned()),
        })
    }
}

// ── ListPresentations ────────────────────────────────────────────────────────

pub struct ListPresentationsUseCase<R: PresentationRepository> {
    pub repo: R,
}

impl<R: PresentationRepository> ListPresentationsUseCase<R> {
    pub async fn execute(&self, scope: Scope) -> Result<Vec<Presentation>, ConferenceError> {
        self.repo.list(scope).await
    }
}

// ── GetPresentation ──────────────────────────────────────────────────────────

pub struct GetPresentationUseCase<R: PresentationRepository> {
    pub repo: R,
}

impl<R: PresentationRepository> GetPresentationUseCase<R> {
    pub async fn execute(&self, id: i32, scope: Scope) -> Result<Presentation, ConferenceError> {
        self.repo
            .find(id, scope)
            .await?
            .ok_or(ConferenceError::PresentationNotFound)
    }
}

// ── CreatePresentation ───────────────────────────────────────────────────────

pub struct CreatePresentationUseCase<R: PresentationRepository> {
    pub repo: R,
}

impl<R: PresentationRepository> CreatePresentationUseCase<R> {
    /// A presenter becomes the author of what they create, so the new row
    /// stays inside their scope.
    pub async fn execute(
        &self,
        scope: Scope,
        input: PresentationInput,
    ) -> Result<Presentation, ConferenceError> {
        let draft = input.into_draft()?;
        let author = match scope {
            Scope::All => None,
            Scope::AuthoredBy(user_id) => Some(user_id),
        };
        self.repo.create(&draft, author).await
    }
}

// ── UpdatePresentation ───────────────────────────────────────────────────────

pub struct UpdatePresentationUseCase<R: PresentationRepository> {
    pub repo: R,
}

impl<R: PresentationRepository> UpdatePresentationUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        scope: Scope,
        input: PresentationInput,
    ) -> Result<(), ConferenceError> {
        let draft = input.into_draft()?;
        if self.repo.find(id, scope).await?.is_none() {
            return Err(ConferenceError::PresentationNotFound);
        }
        if !self.repo.update(id, &draft).await? {
            return Err(ConferenceError::PresentationNotFound);
        }
        Ok(())
    }
}

// ── DeletePresentation ───────────────────────────────────────────────────────

pub struct DeletePresentationUseCase<R: PresentationRepository> {
    pub repo: R,
}

impl<R: PresentationRepository> DeletePresentationUseCase<R> {
    /// Author links and schedule entries go with it (FK cascade).
    pub async fn execute(&self, id: i32, scope: Scope) -> Result<(), ConferenceError> {
        if self.repo.find(id, scope).await?.is_none() {
            return Err(ConferenceError::PresentationNotFound);
        }
        if !self.repo.delete(id).await? {
            return Err(ConferenceError::PresentationNotFound);
        }
        Ok(())
    }
}
