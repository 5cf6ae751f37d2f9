use std::sync::Arc;

use rand::Rng;

use crate::defaults;
use crate::domain::error::{UseCaseError, UseCaseResult};
use crate::repository::{SessionRepository, WordFilter, WordRepository};

use super::{validate_optional_difficulty, validate_session_id, RandomWordDto};

#[derive(Debug, Clone)]
pub struct GetRandomWordInput {
    pub session_id: String,
    pub category_id: Option<i32>,
    pub difficulty: Option<i32>,
    /// Caps the practice pool; defaults to `defaults::DEFAULT_WORD_LIMIT`.
    pub word_limit: Option<i64>,
}

/// Serves one not-yet-seen word for the session, drawn uniformly from the
/// filtered pool, and records it against the session.
pub struct GetRandomWord {
    words: Arc<dyn WordRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl GetRandomWord {
    pub fn new(words: Arc<dyn WordRepository>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { words, sessions }
    }

    pub async fn execute(&self, input: GetRandomWordInput) -> UseCaseResult<RandomWordDto> {
        let session_id = validate_session_id(&input.session_id)?;
        let limit = defaults::validate_word_limit(input.word_limit)?;
        let filter = WordFilter {
            category_id: input.category_id,
            difficulty: validate_optional_difficulty(input.difficulty)?,
        };

        let pool = self.words.find_filtered(&filter, limit).await?;
        if pool.is_empty() {
            return Err(UseCaseError::no_words_available(
                "no words match the requested filter",
            ));
        }

        let session = self.sessions.get_or_create(session_id).await?;
        let candidates: Vec<_> = pool
            .iter()
            .filter(|word| !session.used_word_ids.contains(&word.id))
            .collect();

        if candidates.is_empty() {
            return Err(UseCaseError::no_words_available(format!(
                "all {} words for this filter have been served; reset the session to start over",
                pool.len()
            )));
        }

        let pick = candidates[rand::rng().random_range(0..candidates.len())].clone();
        self.sessions.append_used_word(session_id, pick.id).await?;

        Ok(RandomWordDto {
            word: pick.into(),
            remaining: candidates.len() as i64 - 1,
        })
    }
}
