use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, QueryBuilder, Row};

use crate::domain::{Category, Session, Word};

use super::{CategoryRepository, RepositoryError, SessionRepository, WordFilter, WordRepository};

#[derive(Clone)]
pub struct PgWordRepository {
    pool: PgPool,
}

impl PgWordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_word(row: &PgRow) -> Result<Word, sqlx::Error> {
    Ok(Word {
        id: row.try_get("id")?,
        polish: row.try_get("polish")?,
        english: row.try_get("english")?,
        category_id: row.try_get("category_id")?,
        difficulty: row.try_get("difficulty")?,
    })
}

fn push_filter(builder: &mut QueryBuilder<'_, sqlx::Postgres>, filter: &WordFilter) {
    let mut clause = " WHERE ";
    if let Some(category_id) = filter.category_id {
        builder.push(clause).push("category_id = ").push_bind(category_id);
        clause = " AND ";
    }
    if let Some(difficulty) = filter.difficulty {
        builder.push(clause).push("difficulty = ").push_bind(difficulty);
    }
}

#[async_trait]
impl WordRepository for PgWordRepository {
    async fn find_all(&self) -> Result<Vec<Word>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT id, polish, english, category_id, difficulty FROM words ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(|row| Ok(map_word(row)?)).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Word>, RepositoryError> {
        let row = sqlx::query(
            r#"SELECT id, polish, english, category_id, difficulty FROM words WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(map_word).transpose().map_err(Into::into)
    }

    async fn find_filtered(
        &self,
        filter: &WordFilter,
        limit: i64,
    ) -> Result<Vec<Word>, RepositoryError> {
        let mut builder = QueryBuilder::new(
            "SELECT id, polish, english, category_id, difficulty FROM words",
        );
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY id LIMIT ").push_bind(limit);

        let rows = builder.build().fetch_all(&self.pool).await?;
        rows.iter().map(|row| Ok(map_word(row)?)).collect()
    }

    async fn count(&self, filter: &WordFilter) -> Result<i64, RepositoryError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) AS count FROM words");
        push_filter(&mut builder, filter);

        let row = builder.build().fetch_one(&self.pool).await?;
        Ok(row.try_get("count").map_err(RepositoryError::Database)?)
    }
}

#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query(r#"SELECT id, name FROM categories ORDER BY id"#)
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|row| {
                Ok(Category {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                })
            })
            .collect()
    }
}

#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: &str) -> Result<Session, RepositoryError> {
        let row = sqlx::query(
            r#"SELECT id, used_word_ids, created_at, last_accessed_at FROM sessions WHERE id = $1"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        map_session(&row)
    }

    async fn write_used_words(
        &self,
        id: &str,
        used_word_ids: &[i32],
    ) -> Result<chrono::DateTime<Utc>, RepositoryError> {
        let serialized = serde_json::to_string(used_word_ids)?;
        let now = Utc::now();
        sqlx::query(
            r#"UPDATE sessions SET used_word_ids = $1, last_accessed_at = $2 WHERE id = $3"#,
        )
        .bind(&serialized)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(now)
    }
}

fn map_session(row: &PgRow) -> Result<Session, RepositoryError> {
    let serialized: String = row.try_get("used_word_ids")?;
    Ok(Session {
        id: row.try_get("id")?,
        used_word_ids: serde_json::from_str(&serialized)?,
        created_at: row.try_get("created_at")?,
        last_accessed_at: row.try_get("last_accessed_at")?,
    })
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn get_or_create(&self, id: &str) -> Result<Session, RepositoryError> {
        // Idempotent on the primary key; a second call with the same token
        // leaves the existing row untouched.
        sqlx::query(r#"INSERT INTO sessions (id) VALUES ($1) ON CONFLICT (id) DO NOTHING"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        self.fetch(id).await
    }

    async fn append_used_word(&self, id: &str, word_id: i32) -> Result<Session, RepositoryError> {
        // Read-modify-write, last writer wins. Two concurrent draws for the
        // same session can lose an append; the worst case is a repeated
        // word, never a corrupt list.
        let mut session = self.get_or_create(id).await?;
        if !session.used_word_ids.contains(&word_id) {
            session.used_word_ids.push(word_id);
        }
        session.last_accessed_at = self.write_used_words(id, &session.used_word_ids).await?;
        Ok(session)
    }

    async fn reset(&self, id: &str) -> Result<Session, RepositoryError> {
        let mut session = self.get_or_create(id).await?;
        session.used_word_ids.clear();
        session.last_accessed_at = self.write_used_words(id, &session.used_word_ids).await?;
        Ok(session)
    }
}
