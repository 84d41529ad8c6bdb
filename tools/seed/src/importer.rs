use crate::dataset::TriviaDataset;
use sqlx::SqlitePool;
use std::collections::HashMap;

/// Statistics from an import operation
#[derive(Debug, Default, PartialEq)]
pub struct ImportStats {
    /// Categories that did not exist before
    pub categories_inserted: usize,
    /// Questions written to the database
    pub questions_inserted: usize,
    /// Questions whose text is already stored
    pub duplicates: usize,
    /// Entries skipped (blank text, bad difficulty, unknown category)
    pub skipped: usize,
}

/// Remove every question and category
pub async fn clear(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM questions").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM categories").execute(&mut *tx).await?;
    tx.commit().await
}

/// Import a dataset in one transaction.
///
/// Categories are matched by label and only inserted when missing. A question
/// is skipped when its category is unknown or it fails validation, and counted
/// as a duplicate when a question with the same text already exists, so
/// running the same import twice changes nothing.
pub async fn import_dataset(
    pool: &SqlitePool,
    dataset: TriviaDataset,
) -> Result<ImportStats, Box<dyn std::error::Error>> {
    let mut stats = ImportStats::default();
    let mut tx = pool.begin().await?;

    for label in &dataset.categories {
        let label = label.trim();
        if label.is_empty() {
            continue;
        }
        let result = sqlx::query("INSERT OR IGNORE INTO categories (type) VALUES (?)")
            .bind(label)
            .execute(&mut *tx)
            .await?;
        stats.categories_inserted += result.rows_affected() as usize;
    }

    let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, type FROM categories")
        .fetch_all(&mut *tx)
        .await?;
    let category_ids: HashMap<String, i64> =
        rows.into_iter().map(|(id, label)| (label, id)).collect();

    for entry in dataset.questions {
        let Some(&category_id) = category_ids.get(entry.category.trim()) else {
            stats.skipped += 1;
            continue;
        };
        if !entry.is_valid() {
            stats.skipped += 1;
            continue;
        }

        let question = entry.question.trim();
        let result = sqlx::query(
            "INSERT INTO questions (question, answer, difficulty, category_id) \
             SELECT ?, ?, ?, ? WHERE NOT EXISTS (SELECT 1 FROM questions WHERE question = ?)",
        )
        .bind(question)
        .bind(entry.answer.trim())
        .bind(entry.difficulty)
        .bind(category_id)
        .bind(question)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            stats.duplicates += 1;
        } else {
            stats.questions_inserted += 1;
        }
    }

    tx.commit().await?;
    Ok(stats)
}
