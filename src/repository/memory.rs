use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::{Category, Session, Word};

use super::{CategoryRepository, RepositoryError, SessionRepository, WordFilter, WordRepository};

fn matches(word: &Word, filter: &WordFilter) -> bool {
    filter.category_id.is_none_or(|c| word.category_id == c)
        && filter.difficulty.is_none_or(|d| word.difficulty == d)
}

/// Word store over a fixed slice, used by tests and by the no-database
/// startup path.
pub struct InMemoryWordRepository {
    words: Vec<Word>,
}

impl InMemoryWordRepository {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }
}

#[async_trait]
impl WordRepository for InMemoryWordRepository {
    async fn find_all(&self) -> Result<Vec<Word>, RepositoryError> {
        Ok(self.words.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Word>, RepositoryError> {
        Ok(self.words.iter().find(|w| w.id == id).cloned())
    }

    async fn find_filtered(
        &self,
        filter: &WordFilter,
        limit: i64,
    ) -> Result<Vec<Word>, RepositoryError> {
        Ok(self
            .words
            .iter()
            .filter(|w| matches(w, filter))
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &WordFilter) -> Result<i64, RepositoryError> {
        Ok(self.words.iter().filter(|w| matches(w, filter)).count() as i64)
    }
}

pub struct InMemoryCategoryRepository {
    categories: Vec<Category>,
}

impl InMemoryCategoryRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.categories.clone())
    }
}

/// Session store backed by a map. Unlike the relational backend, every
/// mutation runs under the write lock, so concurrent draws for one session
/// cannot lose an append. Expiry and cleanup are not this store's job,
/// matching the relational backend.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh(id: &str) -> Session {
        let now = Utc::now();
        Session {
            id: id.to_string(),
            used_word_ids: Vec::new(),
            created_at: now,
            last_accessed_at: now,
        }
    }

    fn load_or_insert(sessions: &mut HashMap<String, Session>, id: &str) -> Session {
        sessions
            .entry(id.to_string())
            .or_insert_with(|| Self::fresh(id))
            .clone()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn get_or_create(&self, id: &str) -> Result<Session, RepositoryError> {
        let mut sessions = self.sessions.write();
        Ok(Self::load_or_insert(&mut sessions, id))
    }

    async fn append_used_word(&self, id: &str, word_id: i32) -> Result<Session, RepositoryError> {
        let mut sessions = self.sessions.write();
        let mut session = Self::load_or_insert(&mut sessions, id);
        if !session.used_word_ids.contains(&word_id) {
            session.used_word_ids.push(word_id);
        }
        session.last_accessed_at = Utc::now();
        sessions.insert(id.to_string(), session.clone());
        Ok(session)
    }

    async fn reset(&self, id: &str) -> Result<Session, RepositoryError> {
        let mut sessions = self.sessions.write();
        let mut session = Self::load_or_insert(&mut sessions, id);
        session.used_word_ids.clear();
        session.last_accessed_at = Utc::now();
        sessions.insert(id.to_string(), session.clone());
        Ok(session)
    }
}
