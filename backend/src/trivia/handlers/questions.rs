use crate::AppState;
use crate::error::AppError;
use crate::trivia::core::messages::{
    PageParams, QuestionCreatedResponse, QuestionDeletedResponse, QuestionListResponse,
    QuestionMatchesResponse, SearchRequest,
};
use crate::trivia::core::{
    CategoryFilter, NewQuestion, Question, QuestionSource, category_map, paginate,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use tracing::debug;

pub async fn list_questions(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<QuestionListResponse>, AppError> {
    let Query(params) = params?;

    let all = state.repository.list_questions(CategoryFilter::All).await?;
    let questions = paginate(&all, params.page(), state.questions_per_page).to_vec();
    if questions.is_empty() {
        return Err(AppError::NotFound(format!("page {}", params.page())));
    }

    let categories = state.repository.list_categories().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions: all.len(),
        categories: category_map(&categories),
        current_category: None,
    }))
}

pub async fn create_question(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
    body: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<Json<QuestionCreatedResponse>, AppError> {
    let Query(params) = params?;
    let Json(new) = body?;

    if !new.is_valid() {
        return Err(AppError::Unprocessable(
            "question and answer need text and difficulty starts at 1".to_string(),
        ));
    }

    let created = state
        .repository
        .insert_question(&new)
        .await
        .map_err(AppError::from_write)?;
    let (questions, total_questions) = current_page(&state, params.page()).await?;

    Ok(Json(QuestionCreatedResponse {
        success: true,
        created,
        questions,
        total_questions,
    }))
}

pub async fn delete_question(
    State(state): State<AppState>,
    question_id: Result<Path<i64>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<QuestionDeletedResponse>, AppError> {
    let Path(question_id) = question_id?;
    let Query(params) = params?;

    if !state.repository.delete_question(question_id).await? {
        return Err(AppError::Unprocessable(format!(
            "question {question_id} does not exist"
        )));
    }

    let (questions, total_questions) = current_page(&state, params.page()).await?;

    Ok(Json(QuestionDeletedResponse {
        success: true,
        deleted: question_id,
        questions,
        total_questions,
    }))
}

pub async fn search_questions(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<QuestionMatchesResponse>, AppError> {
    let Query(params) = params?;
    let Json(request) = body?;

    let matches = state.repository.search_questions(&request.search_term).await?;
    debug!(
        term = request.search_term,
        matches = matches.len(),
        "Searched questions"
    );

    Ok(Json(QuestionMatchesResponse {
        success: true,
        questions: paginate(&matches, params.page(), state.questions_per_page).to_vec(),
        total_questions: matches.len(),
        current_category: None,
    }))
}

/// The requested page of all questions after a write, plus the new total
async fn current_page(state: &AppState, page: i64) -> Result<(Vec<Question>, usize), AppError> {
    let all = state.repository.list_questions(CategoryFilter::All).await?;
    let questions = paginate(&all, page, state.questions_per_page).to_vec();
    Ok((questions, all.len()))
}
