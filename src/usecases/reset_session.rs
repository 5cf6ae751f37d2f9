use std::sync::Arc;

use crate::domain::error::UseCaseResult;
use crate::repository::SessionRepository;

use super::{validate_session_id, SessionDto};

/// Empties the session's used-word list so the whole pool becomes
/// drawable again. `created_at` survives; `last_accessed_at` is bumped.
pub struct ResetSession {
    sessions: Arc<dyn SessionRepository>,
}

impl ResetSession {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, session_id: &str) -> UseCaseResult<SessionDto> {
        let session_id = validate_session_id(session_id)?;
        let session = self.sessions.reset(session_id).await?;
        Ok(session.into())
    }
}
