use crate::AppState;
use crate::error::AppError;
use crate::trivia::core::messages::{CategoriesResponse, PageParams, QuestionMatchesResponse};
use crate::trivia::core::{CategoryFilter, QuestionSource, category_map, paginate};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use tracing::debug;

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state.repository.list_categories().await?;
    if categories.is_empty() {
        return Err(AppError::NotFound("no categories".to_string()));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_map(&categories),
    }))
}

pub async fn category_questions(
    State(state): State<AppState>,
    category_id: Result<Path<i64>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<QuestionMatchesResponse>, AppError> {
    let Path(category_id) = category_id?;
    let Query(params) = params?;

    let Some(category) = state.repository.find_category(category_id).await? else {
        return Err(AppError::NotFound(format!("category {category_id}")));
    };

    let matches = state
        .repository
        .list_questions(CategoryFilter::Category(category.id))
        .await?;
    debug!(category_id, matches = matches.len(), "Listing category questions");

    Ok(Json(QuestionMatchesResponse {
        success: true,
        questions: paginate(&matches, params.page(), state.questions_per_page).to_vec(),
        total_questions: matches.len(),
        current_category: Some(category.id),
    }))
}
