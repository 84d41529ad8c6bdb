use super::category::Category;
use super::question::{NewQuestion, Question};
use super::question_pool::{CategoryFilter, QuestionSource};
use sqlx::SqlitePool;
use tracing::info;

const SELECT_QUESTIONS: &str =
    "SELECT id, question, answer, category_id AS category, difficulty FROM questions";

#[derive(Clone)]
pub struct QuestionRepository {
    pool: SqlitePool,
}

impl QuestionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_category(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as("SELECT id, type FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Case-insensitive substring match on the question text. SQLite's `LIKE`
    /// only folds ASCII, so matching happens here on lowercased text.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let needle = term.to_lowercase();
        let sql = format!("{SELECT_QUESTIONS} ORDER BY id");
        let questions: Vec<Question> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(questions
            .into_iter()
            .filter(|q| contains_folded(&q.question, &needle))
            .collect())
    }

    pub async fn insert_question(&self, new: &NewQuestion) -> Result<i64, sqlx::Error> {
        let id = sqlx::query(
            "INSERT INTO questions (question, answer, difficulty, category_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.difficulty)
        .bind(new.category)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        info!(id, category = ?new.category, "Question created");
        Ok(id)
    }

    /// Returns false when no question had this id
    pub async fn delete_question(&self, id: i64) -> Result<bool, sqlx::Error> {
        let deleted = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected()
            > 0;

        if deleted {
            info!(id, "Question deleted");
        }
        Ok(deleted)
    }
}

impl QuestionSource for QuestionRepository {
    type Error = sqlx::Error;

    async fn list_questions(&self, filter: CategoryFilter) -> Result<Vec<Question>, sqlx::Error> {
        let questions = match filter {
            CategoryFilter::All => {
                let sql = format!("{SELECT_QUESTIONS} ORDER BY id");
                sqlx::query_as(&sql).fetch_all(&self.pool).await?
            }
            CategoryFilter::Category(id) => {
                let sql = format!("{SELECT_QUESTIONS} WHERE category_id = ? ORDER BY id");
                sqlx::query_as(&sql).bind(id).fetch_all(&self.pool).await?
            }
        };
        Ok(questions)
    }
}

fn contains_folded(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_non_ascii_case() {
        assert!(contains_folded("Où est l'ÉCOLE ?", "école"));
        assert!(contains_folded("STRAẞE", "straße"));
    }

    #[test]
    fn wildcards_are_plain_characters() {
        assert!(contains_folded("100% sure", "100%"));
        assert!(!contains_folded("title", "t_tle"));
    }
}
