mod category;
pub mod messages;
mod pagination;
mod question;
pub mod question_pool;
mod question_repository;

pub use category::{Category, CategoryMap, category_map};
pub use pagination::{DEFAULT_PAGE_SIZE, paginate};
pub use question::{NewQuestion, Question};
pub use question_pool::{
    CategoryFilter, InvalidFilter, QuestionPool, QuestionSource, QuizDraw, SeenSet, draw,
};
pub use question_repository::QuestionRepository;
