pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::error::UseCaseError;
use crate::domain::{Category, Session, Word};

/// Errors raised by storage adapters. Use cases never branch on these;
/// they all surface as `Internal`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("stored word list is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<RepositoryError> for UseCaseError {
    fn from(err: RepositoryError) -> Self {
        UseCaseError::internal(err.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFilter {
    pub category_id: Option<i32>,
    pub difficulty: Option<i32>,
}

#[async_trait]
pub trait WordRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Word>, RepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Word>, RepositoryError>;

    /// Words matching the filter in stable id order, capped at `limit`.
    async fn find_filtered(
        &self,
        filter: &WordFilter,
        limit: i64,
    ) -> Result<Vec<Word>, RepositoryError>;

    async fn count(&self, filter: &WordFilter) -> Result<i64, RepositoryError>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Loads the session, creating an empty row on first access with the
    /// given token. Must not create duplicates for a token already seen.
    async fn get_or_create(&self, id: &str) -> Result<Session, RepositoryError>;

    /// Records that a word was served, bumping `last_accessed_at`.
    /// Returns the session as written.
    async fn append_used_word(&self, id: &str, word_id: i32) -> Result<Session, RepositoryError>;

    /// Clears the used-word list, preserving `created_at` and bumping
    /// `last_accessed_at`. Creates the session first if the token is new.
    async fn reset(&self, id: &str) -> Result<Session, RepositoryError>;
}
