pub mod error;
mod trivia;

pub use error::{AppError, ErrorBody};
pub use trivia::core::{
    Category, CategoryFilter, InvalidFilter, NewQuestion, Question, QuestionSource, QuizDraw,
    SeenSet, draw, paginate,
};
pub use trivia::{QuestionPool, QuestionRepository, messages};

use axum::{
    Router,
    http::{Method, StatusCode, Uri, header},
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use trivia::core::DEFAULT_PAGE_SIZE;
use trivia::handlers::{categories, questions, quizzes};

async fn health() -> &'static str {
    "ok"
}

#[derive(Clone)]
pub struct AppState {
    pub repository: QuestionRepository,
    pub quiz: QuestionPool<QuestionRepository>,
    pub questions_per_page: usize,
}

pub fn app(pool: SqlitePool) -> Router {
    app_with_config(pool, None)
}

pub fn app_with_config(pool: SqlitePool, questions_per_page: Option<usize>) -> Router {
    let repository = QuestionRepository::new(pool);
    let state = AppState {
        quiz: QuestionPool::new(repository.clone()),
        repository,
        questions_per_page: questions_per_page.unwrap_or(DEFAULT_PAGE_SIZE),
    };

    Router::new()
        .route("/health", get(health))
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:category_id/questions",
            get(categories::category_questions),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/:question_id", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::next_quiz_question))
        .fallback(not_found)
        .layer(middleware::map_response(method_not_allowed_body))
        .layer(cors())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {uri}"))
}

/// Give axum's bare 405 the same JSON body as every other error, keeping `Allow`.
async fn method_not_allowed_body(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut error = AppError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        error.headers_mut().insert(header::ALLOW, allow);
    }
    error
}
