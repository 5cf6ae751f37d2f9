use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::response::{success, AppError, SuccessResponse};
use crate::state::AppState;
use crate::usecases::{
    CheckTranslationInput, Direction, GetRandomWordInput, GetWordCountInput, RandomWordDto,
    TranslationCheckDto, WordCountDto, WordDto,
};

use super::session_token;

pub async fn all_words(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<Vec<WordDto>>>, AppError> {
    let words = state.use_cases().get_all_words.execute().await?;
    Ok(success(words))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomWordQuery {
    category_id: Option<i32>,
    difficulty: Option<i32>,
    limit: Option<i64>,
}

pub async fn random_word(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RandomWordQuery>,
) -> Result<Json<SuccessResponse<RandomWordDto>>, AppError> {
    let input = GetRandomWordInput {
        session_id: session_token(&headers)?,
        category_id: query.category_id,
        difficulty: query.difficulty,
        word_limit: query.limit,
    };
    let word = state.use_cases().get_random_word.execute(input).await?;
    Ok(success(word))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCountQuery {
    category_id: Option<i32>,
    difficulty: Option<i32>,
}

pub async fn word_count(
    State(state): State<AppState>,
    Query(query): Query<WordCountQuery>,
) -> Result<Json<SuccessResponse<WordCountDto>>, AppError> {
    let input = GetWordCountInput {
        category_id: query.category_id,
        difficulty: query.difficulty,
    };
    let count = state.use_cases().get_word_count.execute(input).await?;
    Ok(success(count))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckTranslationRequest {
    word_id: i32,
    answer: String,
    #[serde(default)]
    direction: Direction,
}

pub async fn check_translation(
    State(state): State<AppState>,
    Json(request): Json<CheckTranslationRequest>,
) -> Result<Json<SuccessResponse<TranslationCheckDto>>, AppError> {
    let input = CheckTranslationInput {
        word_id: request.word_id,
        answer: request.answer,
        direction: request.direction,
    };
    let result = state.use_cases().check_translation.execute(input).await?;
    Ok(success(result))
}
