use std::sync::Arc;

use serde::Deserialize;

use crate::domain::error::{UseCaseError, UseCaseResult};
use crate::domain::Word;
use crate::repository::WordRepository;

use super::TranslationCheckDto;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    PolishToEnglish,
    EnglishToPolish,
}

#[derive(Debug, Clone)]
pub struct CheckTranslationInput {
    pub word_id: i32,
    pub answer: String,
    pub direction: Direction,
}

/// Grades a submitted translation against the stored pair. Comparison is
/// case- and surrounding-whitespace-insensitive.
pub struct CheckTranslation {
    words: Arc<dyn WordRepository>,
}

impl CheckTranslation {
    pub fn new(words: Arc<dyn WordRepository>) -> Self {
        Self { words }
    }

    pub async fn execute(&self, input: CheckTranslationInput) -> UseCaseResult<TranslationCheckDto> {
        if input.answer.trim().is_empty() {
            return Err(UseCaseError::validation("answer must not be empty"));
        }

        let word = self
            .words
            .find_by_id(input.word_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(format!("word {} not found", input.word_id)))?;

        let expected = expected_answer(&word, input.direction);
        Ok(TranslationCheckDto {
            correct: normalize(&input.answer) == normalize(expected),
            expected: expected.to_string(),
        })
    }
}

fn expected_answer(word: &Word, direction: Direction) -> &str {
    match direction {
        Direction::PolishToEnglish => &word.english,
        Direction::EnglishToPolish => &word.polish,
    }
}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::InMemoryWordRepository;

    fn use_case() -> CheckTranslation {
        CheckTranslation::new(Arc::new(InMemoryWordRepository::new(vec![Word {
            id: 7,
            polish: "Żółty".to_string(),
            english: "yellow".to_string(),
            category_id: 4,
            difficulty: 2,
        }])))
    }

    fn input(word_id: i32, answer: &str, direction: Direction) -> CheckTranslationInput {
        CheckTranslationInput {
            word_id,
            answer: answer.to_string(),
            direction,
        }
    }

    #[tokio::test]
    async fn grades_case_and_whitespace_insensitively() {
        let result = use_case()
            .execute(input(7, "  YELLOW ", Direction::PolishToEnglish))
            .await
            .unwrap();
        assert!(result.correct);
        assert_eq!(result.expected, "yellow");
    }

    #[tokio::test]
    async fn reverse_direction_expects_the_polish_side() {
        let result = use_case()
            .execute(input(7, "żółty", Direction::EnglishToPolish))
            .await
            .unwrap();
        assert!(result.correct);
        assert_eq!(result.expected, "Żółty");
    }

    #[tokio::test]
    async fn wrong_answer_reports_expected_text() {
        let result = use_case()
            .execute(input(7, "green", Direction::PolishToEnglish))
            .await
            .unwrap();
        assert!(!result.correct);
        assert_eq!(result.expected, "yellow");
    }

    #[tokio::test]
    async fn unknown_word_is_not_found() {
        let err = use_case()
            .execute(input(99, "yellow", Direction::PolishToEnglish))
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound(_)));
    }

    #[tokio::test]
    async fn empty_answer_is_rejected_before_the_lookup() {
        let err = use_case()
            .execute(input(7, "   ", Direction::PolishToEnglish))
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::Validation(_)));
    }
}
