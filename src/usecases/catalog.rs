use std::sync::Arc;

use crate::defaults;
use crate::domain::error::UseCaseResult;
use crate::repository::{CategoryRepository, WordFilter, WordRepository};

use super::{validate_optional_difficulty, CategoryDto, DifficultyDto, WordCountDto};

pub struct GetCategories {
    categories: Arc<dyn CategoryRepository>,
}

impl GetCategories {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn execute(&self) -> UseCaseResult<Vec<CategoryDto>> {
        let categories = self.categories.find_all().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }
}

/// The difficulty scale is fixed configuration, not a stored entity; no
/// repository is involved.
pub struct GetDifficulties;

impl GetDifficulties {
    // Infallible, but kept on the same Result shape as every other
    // operation so call sites are uniform.
    pub fn execute(&self) -> UseCaseResult<Vec<DifficultyDto>> {
        Ok(defaults::DIFFICULTY_LABELS
            .iter()
            .map(|(level, label)| DifficultyDto {
                level: *level,
                label,
            })
            .collect())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetWordCountInput {
    pub category_id: Option<i32>,
    pub difficulty: Option<i32>,
}

pub struct GetWordCount {
    words: Arc<dyn WordRepository>,
}

impl GetWordCount {
    pub fn new(words: Arc<dyn WordRepository>) -> Self {
        Self { words }
    }

    pub async fn execute(&self, input: GetWordCountInput) -> UseCaseResult<WordCountDto> {
        let filter = WordFilter {
            category_id: input.category_id,
            difficulty: validate_optional_difficulty(input.difficulty)?,
        };
        let count = self.words.count(&filter).await?;
        Ok(WordCountDto { count })
    }
}
