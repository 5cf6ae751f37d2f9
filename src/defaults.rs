use crate::domain::error::UseCaseError;

pub const MIN_WORD_LIMIT: i64 = 1;
pub const MAX_WORD_LIMIT: i64 = 150;
pub const DEFAULT_WORD_LIMIT: i64 = 50;

/// Advisory lifetime for practice sessions, exposed for API consumers
/// (e.g. cookie max-age). Expiry and cleanup of stored sessions are owned
/// externally; neither backend deletes or empties rows on its own.
pub const SESSION_TIME_LIMIT_SECS: u64 = 300;

pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 3;

pub const DIFFICULTY_LABELS: &[(i32, &str)] = &[(1, "Easy"), (2, "Medium"), (3, "Hard")];

pub fn difficulty_label(level: i32) -> Option<&'static str> {
    DIFFICULTY_LABELS
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, label)| *label)
}

/// Resolves the requested practice-pool size, falling back to the default
/// when absent and rejecting anything outside the configured bounds.
pub fn validate_word_limit(requested: Option<i64>) -> Result<i64, UseCaseError> {
    match requested {
        None => Ok(DEFAULT_WORD_LIMIT),
        Some(limit) if (MIN_WORD_LIMIT..=MAX_WORD_LIMIT).contains(&limit) => Ok(limit),
        Some(limit) => Err(UseCaseError::validation(format!(
            "word limit must be between {MIN_WORD_LIMIT} and {MAX_WORD_LIMIT}, got {limit}"
        ))),
    }
}

pub fn validate_difficulty(level: i32) -> Result<i32, UseCaseError> {
    if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&level) {
        Ok(level)
    } else {
        Err(UseCaseError::validation(format!(
            "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got {level}"
        )))
    }
}
