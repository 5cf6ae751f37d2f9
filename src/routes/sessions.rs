use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::response::{success, AppError, SuccessResponse};
use crate::state::AppState;
use crate::usecases::SessionDto;

use super::session_token;

pub async fn reset(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SuccessResponse<SessionDto>>, AppError> {
    let token = session_token(&headers)?;
    let session = state.use_cases().reset_session.execute(&token).await?;
    Ok(success(session))
}
