use serde::{Deserialize, Serialize};

/// A trivia question as stored and served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: i64,
}

/// A question that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    #[serde(default)]
    pub category: Option<i64>,
}

impl NewQuestion {
    /// Question and answer must have visible text and difficulty starts at 1.
    pub fn is_valid(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty() && self.difficulty >= 1
    }
}
