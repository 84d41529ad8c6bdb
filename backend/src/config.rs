use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite:trivia.db?mode=rwc";

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub questions_per_page: Option<usize>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            questions_per_page: parse_page_size(env::var("QUESTIONS_PER_PAGE").ok()),
        }
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Zero or unparsable sizes fall back to the default
fn parse_page_size(value: Option<String>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse().ok())
        .filter(|&size| size > 0)
}
