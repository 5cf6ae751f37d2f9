use sqlx::PgPool;

/// Table definitions, applied idempotently at startup. Column constraints
/// (lengths, uniqueness, foreign keys, defaults) are the integrity layer;
/// use cases do not re-validate what the store already enforces.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS words (
    id SERIAL PRIMARY KEY,
    polish VARCHAR(500) NOT NULL,
    english VARCHAR(500) NOT NULL,
    category_id INTEGER NOT NULL REFERENCES categories(id),
    difficulty INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS sessions (
    id VARCHAR(255) PRIMARY KEY,
    used_word_ids TEXT NOT NULL DEFAULT '[]',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    last_accessed_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
"#;

pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in split_sql_statements(SCHEMA_SQL) {
        sqlx::query(&statement).execute(pool).await?;
    }
    Ok(())
}

pub fn split_sql_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    for ch in sql.chars() {
        match ch {
            '\'' if !in_double_quote => in_single_quote = !in_single_quote,
            '"' if !in_single_quote => in_double_quote = !in_double_quote,
            ';' if !in_single_quote && !in_double_quote => {
                let statement = current.trim();
                if !statement.is_empty() {
                    statements.push(statement.to_string());
                }
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }

    let tail = current.trim();
    if !tail.is_empty() {
        statements.push(tail.to_string());
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::split_sql_statements;

    #[test]
    fn splits_on_top_level_semicolons_only() {
        let statements =
            split_sql_statements("CREATE TABLE a (x TEXT DEFAULT 'a;b');\nSELECT 1;");
        assert_eq!(statements.len(), 2);
        assert!(statements[0].contains("'a;b'"));
        assert_eq!(statements[1], "SELECT 1");
    }

    #[test]
    fn schema_has_one_statement_per_table() {
        assert_eq!(split_sql_statements(super::SCHEMA_SQL).len(), 3);
    }
}
