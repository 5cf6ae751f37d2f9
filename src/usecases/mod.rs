mod catalog;
mod check_translation;
mod get_all_words;
mod get_random_word;
mod reset_session;

pub use catalog::{GetCategories, GetDifficulties, GetWordCount, GetWordCountInput};
pub use check_translation::{CheckTranslation, CheckTranslationInput, Direction};
pub use get_all_words::GetAllWords;
pub use get_random_word::{GetRandomWord, GetRandomWordInput};
pub use reset_session::ResetSession;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::defaults;
use crate::domain::error::{UseCaseError, UseCaseResult};
use crate::domain::{Category, Session, Word};

// Output shapes returned across the use-case boundary. Field values match
// the source rows exactly; only the casing changes on the wire.

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDto {
    pub id: i32,
    pub polish: String,
    pub english: String,
    pub category_id: i32,
    pub difficulty: i32,
}

impl From<Word> for WordDto {
    fn from(word: Word) -> Self {
        Self {
            id: word.id,
            polish: word.polish,
            english: word.english,
            category_id: word.category_id,
            difficulty: word.difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyDto {
    pub level: i32,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomWordDto {
    pub word: WordDto,
    /// Words still unserved for this session and filter.
    pub remaining: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationCheckDto {
    pub correct: bool,
    pub expected: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCountDto {
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub id: String,
    pub used_word_ids: Vec<i32>,
    pub created_at: String,
    pub last_accessed_at: String,
}

impl From<Session> for SessionDto {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            used_word_ids: session.used_word_ids,
            created_at: iso(session.created_at),
            last_accessed_at: iso(session.last_accessed_at),
        }
    }
}

fn iso(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Session tokens are caller-supplied and opaque; only emptiness is
/// rejected here.
pub(crate) fn validate_session_id(raw: &str) -> UseCaseResult<&str> {
    let token = raw.trim();
    if token.is_empty() {
        return Err(UseCaseError::validation("session token must not be empty"));
    }
    Ok(token)
}

pub(crate) fn validate_optional_difficulty(level: Option<i32>) -> UseCaseResult<Option<i32>> {
    level.map(defaults::validate_difficulty).transpose()
}
