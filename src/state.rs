use std::sync::Arc;
use std::time::Instant;

use crate::db::{seed, Database};
use crate::repository::memory::{
    InMemoryCategoryRepository, InMemorySessionRepository, InMemoryWordRepository,
};
use crate::repository::postgres::{PgCategoryRepository, PgSessionRepository, PgWordRepository};
use crate::repository::{CategoryRepository, SessionRepository, WordRepository};
use crate::usecases::{
    CheckTranslation, GetAllWords, GetCategories, GetDifficulties, GetRandomWord, GetWordCount,
    ResetSession,
};

/// One constructed instance per operation, shared across all requests.
/// Use cases hold only `Arc<dyn …Repository>` and are stateless, so no
/// synchronization is needed beyond the `Arc`s themselves.
pub struct UseCases {
    pub get_all_words: GetAllWords,
    pub get_random_word: GetRandomWord,
    pub check_translation: CheckTranslation,
    pub reset_session: ResetSession,
    pub get_categories: GetCategories,
    pub get_difficulties: GetDifficulties,
    pub get_word_count: GetWordCount,
}

/// Composition root. The dependency graph is built once, by plain
/// constructors; a missing dependency is a compile error, not a runtime
/// lookup failure. Tests get their own scope through `from_repositories`.
#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    use_cases: Arc<UseCases>,
    database: Option<Database>,
}

impl AppState {
    /// Production wiring over the relational store.
    pub fn with_database(database: Database) -> Self {
        let pool = database.pool().clone();
        Self::assemble(
            Arc::new(PgWordRepository::new(pool.clone())),
            Arc::new(PgCategoryRepository::new(pool.clone())),
            Arc::new(PgSessionRepository::new(pool)),
            Some(database),
        )
    }

    /// Wiring over the seeded in-memory store, used when no database is
    /// configured.
    pub fn in_memory() -> Self {
        Self::assemble(
            Arc::new(InMemoryWordRepository::new(seed::sample_words())),
            Arc::new(InMemoryCategoryRepository::new(seed::sample_categories())),
            Arc::new(InMemorySessionRepository::new()),
            None,
        )
    }

    /// Scoped wiring from caller-supplied implementations. This is the
    /// override point tests use to substitute doubles.
    pub fn from_repositories(
        words: Arc<dyn WordRepository>,
        categories: Arc<dyn CategoryRepository>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self::assemble(words, categories, sessions, None)
    }

    fn assemble(
        words: Arc<dyn WordRepository>,
        categories: Arc<dyn CategoryRepository>,
        sessions: Arc<dyn SessionRepository>,
        database: Option<Database>,
    ) -> Self {
        let use_cases = UseCases {
            get_all_words: GetAllWords::new(Arc::clone(&words)),
            get_random_word: GetRandomWord::new(Arc::clone(&words), Arc::clone(&sessions)),
            check_translation: CheckTranslation::new(Arc::clone(&words)),
            reset_session: ResetSession::new(sessions),
            get_categories: GetCategories::new(categories),
            get_difficulties: GetDifficulties,
            get_word_count: GetWordCount::new(words),
        };

        Self {
            started_at: Instant::now(),
            use_cases: Arc::new(use_cases),
            database,
        }
    }

    pub fn use_cases(&self) -> &UseCases {
        &self.use_cases
    }

    pub fn database(&self) -> Option<&Database> {
        self.database.as_ref()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
