use std::sync::Arc;

use crate::domain::error::UseCaseResult;
use crate::repository::WordRepository;

use super::WordDto;

/// Returns the full word collection, mapped row-for-row to DTOs. No
/// filtering or pagination; the only failure path is the store itself.
pub struct GetAllWords {
    words: Arc<dyn WordRepository>,
}

impl GetAllWords {
    pub fn new(words: Arc<dyn WordRepository>) -> Self {
        Self { words }
    }

    pub async fn execute(&self) -> UseCaseResult<Vec<WordDto>> {
        let words = self.words.find_all().await?;
        Ok(words.into_iter().map(WordDto::from).collect())
    }
}
