use crate::AppState;
use crate::error::AppError;
use crate::trivia::core::CategoryFilter;
use crate::trivia::core::messages::{QuizRequest, QuizResponse};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;

/// Serve the next unseen question for a quiz session.
///
/// The client sends back the ids it has already been shown; the response
/// carries the extended list. `question` is null once the category is used up.
pub async fn next_quiz_question(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, AppError> {
    let Json(request) = body?;
    let filter = CategoryFilter::try_from(&request.quiz_category)?;

    let draw = state
        .quiz
        .next_question(filter, request.previous_questions)
        .await?;

    info!(
        %filter,
        question_id = ?draw.question.as_ref().map(|q| q.id),
        served = draw.seen.len(),
        "Quiz question drawn"
    );

    Ok(Json(QuizResponse {
        success: true,
        question: draw.question,
        previous_questions: draw.seen,
    }))
}
