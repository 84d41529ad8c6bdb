use super::category::CategoryMap;
use super::question::Question;
use super::question_pool::SeenSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============ Requests ============

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Body of `POST /quizzes`. The category stays raw JSON until it is
/// parsed into a filter, so a bad value reports as an invalid filter.
#[derive(Debug, Deserialize, PartialEq)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: SeenSet,
    #[serde(default)]
    pub quiz_category: Value,
}

// ============ Responses ============

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct QuestionDeletedResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Search and per-category listings
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct QuestionMatchesResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
    pub previous_questions: SeenSet,
}
