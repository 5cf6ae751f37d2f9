use sqlx::{PgPool, Row};

use crate::domain::{Category, Word};

struct SeedWord {
    polish: &'static str,
    english: &'static str,
    category: &'static str,
    difficulty: i32,
}

const SEED_CATEGORIES: &[&str] = &["Animals", "Food", "Travel", "Colors"];

const SEED_WORDS: &[SeedWord] = &[
    SeedWord { polish: "kot", english: "cat", category: "Animals", difficulty: 1 },
    SeedWord { polish: "pies", english: "dog", category: "Animals", difficulty: 1 },
    SeedWord { polish: "ptak", english: "bird", category: "Animals", difficulty: 1 },
    SeedWord { polish: "koń", english: "horse", category: "Animals", difficulty: 2 },
    SeedWord { polish: "niedźwiedź", english: "bear", category: "Animals", difficulty: 3 },
    SeedWord { polish: "chleb", english: "bread", category: "Food", difficulty: 1 },
    SeedWord { polish: "jabłko", english: "apple", category: "Food", difficulty: 1 },
    SeedWord { polish: "ser", english: "cheese", category: "Food", difficulty: 2 },
    SeedWord { polish: "śniadanie", english: "breakfast", category: "Food", difficulty: 2 },
    SeedWord { polish: "bilet", english: "ticket", category: "Travel", difficulty: 2 },
    SeedWord { polish: "pociąg", english: "train", category: "Travel", difficulty: 2 },
    SeedWord { polish: "lotnisko", english: "airport", category: "Travel", difficulty: 3 },
    SeedWord { polish: "podróż", english: "journey", category: "Travel", difficulty: 3 },
    SeedWord { polish: "czerwony", english: "red", category: "Colors", difficulty: 1 },
    SeedWord { polish: "zielony", english: "green", category: "Colors", difficulty: 1 },
    SeedWord { polish: "żółty", english: "yellow", category: "Colors", difficulty: 2 },
];

/// Seeds the sample word set on an empty store. Word data is otherwise
/// created administratively, outside this service.
pub async fn seed_if_empty(pool: &PgPool) {
    let existing: i64 = match sqlx::query(r#"SELECT COUNT(*) AS count FROM words"#)
        .fetch_one(pool)
        .await
        .and_then(|row| row.try_get("count"))
    {
        Ok(count) => count,
        Err(err) => {
            tracing::warn!(error = %err, "word count check failed, skipping seed");
            return;
        }
    };

    if existing > 0 {
        tracing::debug!(words = existing, "word store already populated");
        return;
    }

    for &name in SEED_CATEGORIES {
        if let Err(err) =
            sqlx::query(r#"INSERT INTO categories (name) VALUES ($1) ON CONFLICT (name) DO NOTHING"#)
                .bind(name)
                .execute(pool)
                .await
        {
            tracing::warn!(error = %err, category = name, "failed to seed category");
            return;
        }
    }

    let mut inserted = 0usize;
    for word in SEED_WORDS {
        let result = sqlx::query(
            r#"
            INSERT INTO words (polish, english, category_id, difficulty)
            SELECT $1, $2, c.id, $3 FROM categories c WHERE c.name = $4
            "#,
        )
        .bind(word.polish)
        .bind(word.english)
        .bind(word.difficulty)
        .bind(word.category)
        .execute(pool)
        .await;

        match result {
            Ok(_) => inserted += 1,
            Err(err) => {
                tracing::warn!(error = %err, polish = word.polish, "failed to seed word")
            }
        }
    }

    tracing::info!(words = inserted, categories = SEED_CATEGORIES.len(), "seeded word store");
}

/// The same sample set as plain values, for the in-memory backend.
pub fn sample_categories() -> Vec<Category> {
    SEED_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, name)| Category {
            id: index as i32 + 1,
            name: (*name).to_string(),
        })
        .collect()
}

pub fn sample_words() -> Vec<Word> {
    let category_id = |name: &str| {
        SEED_CATEGORIES
            .iter()
            .position(|c| *c == name)
            .map(|index| index as i32 + 1)
            .unwrap_or(1)
    };

    SEED_WORDS
        .iter()
        .enumerate()
        .map(|(index, word)| Word {
            id: index as i32 + 1,
            polish: word.polish.to_string(),
            english: word.english.to_string(),
            category_id: category_id(word.category),
            difficulty: word.difficulty,
        })
        .collect()
}
