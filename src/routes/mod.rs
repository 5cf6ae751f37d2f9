mod catalog;
mod health;
mod sessions;
mod words;

use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Router;

use crate::response::AppError;
use crate::state::AppState;

pub const SESSION_HEADER: &str = "x-session-id";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/words", get(words::all_words))
        .route("/api/words/random", get(words::random_word))
        .route("/api/words/count", get(words::word_count))
        .route("/api/words/check", post(words::check_translation))
        .route("/api/categories", get(catalog::categories))
        .route("/api/difficulties", get(catalog::difficulties))
        .route("/api/sessions/reset", post(sessions::reset))
        .nest("/health", health::router())
        .with_state(state)
}

/// The session token is an opaque caller-supplied string; its format is
/// never validated here, only its presence.
pub(crate) fn session_token(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::validation(format!("missing {SESSION_HEADER} header")))
}
