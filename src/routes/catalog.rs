use axum::extract::State;
use axum::Json;

use crate::response::{success, AppError, SuccessResponse};
use crate::state::AppState;
use crate::usecases::{CategoryDto, DifficultyDto};

pub async fn categories(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<Vec<CategoryDto>>>, AppError> {
    let categories = state.use_cases().get_categories.execute().await?;
    Ok(success(categories))
}

pub async fn difficulties(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<Vec<DifficultyDto>>>, AppError> {
    let difficulties = state.use_cases().get_difficulties.execute()?;
    Ok(success(difficulties))
}
