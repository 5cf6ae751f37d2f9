use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;

use slowka_backend::domain::Word;
use slowka_backend::repository::memory::{
    InMemoryCategoryRepository, InMemorySessionRepository,
};
use slowka_backend::repository::{RepositoryError, WordFilter, WordRepository};
use slowka_backend::state::AppState;

mod common;

/// Word store whose every call fails the way a lost connection would.
struct FailingWordRepository;

fn store_down() -> RepositoryError {
    RepositoryError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl WordRepository for FailingWordRepository {
    async fn find_all(&self) -> Result<Vec<Word>, RepositoryError> {
        Err(store_down())
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Word>, RepositoryError> {
        Err(store_down())
    }

    async fn find_filtered(
        &self,
        _filter: &WordFilter,
        _limit: i64,
    ) -> Result<Vec<Word>, RepositoryError> {
        Err(store_down())
    }

    async fn count(&self, _filter: &WordFilter) -> Result<i64, RepositoryError> {
        Err(store_down())
    }
}

fn app_with_failing_store() -> axum::Router {
    let state = AppState::from_repositories(
        Arc::new(FailingWordRepository),
        Arc::new(InMemoryCategoryRepository::new(Vec::new())),
        Arc::new(InMemorySessionRepository::new()),
    );
    slowka_backend::app_with_state(state)
}

#[tokio::test]
async fn store_failures_surface_as_internal_error() {
    let app = app_with_failing_store();

    for uri in ["/api/words", "/api/words/count"] {
        let (status, body) = common::get(&app, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body["success"], false, "{uri}");
        assert_eq!(body["code"], "INTERNAL_ERROR", "{uri}");
    }
}

#[tokio::test]
async fn internal_error_detail_stays_out_of_the_response() {
    let app = app_with_failing_store();

    let (status, body) = common::get(&app, "/api/words").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal server error");
    // The driver's own message never reaches the wire.
    assert!(!body.to_string().contains("timed out"));
    assert!(!body.to_string().contains("pool"));
}

#[tokio::test]
async fn random_word_propagates_store_failure_too() {
    let app = app_with_failing_store();
    let session = common::session_token();

    let (status, body) =
        common::get_with_session(&app, "/api/words/random", &session).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
}
