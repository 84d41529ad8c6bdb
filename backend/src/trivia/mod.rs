pub mod core;
pub mod handlers;

pub use self::core::{QuestionPool, QuestionRepository, messages};
