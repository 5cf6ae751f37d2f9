pub mod error;

use chrono::{DateTime, Utc};

/// Thematic grouping of words. Created administratively; read-only to the
/// application logic here.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// One Polish/English translation pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub id: i32,
    pub polish: String,
    pub english: String,
    pub category_id: i32,
    pub difficulty: i32,
}

/// Per-client practice progress, keyed by a caller-supplied opaque token.
/// `used_word_ids` records which words have already been served so draws
/// never repeat within a session; it only grows until an explicit reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    pub used_word_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}
