use super::question::Question;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Which slice of the question pool a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(i64),
}

/// A category filter value that is neither a category id nor "all"
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidFilter {
    #[error("quiz category is missing")]
    Missing,
    #[error("quiz category {0} is neither a category id nor \"all\"")]
    Malformed(String),
}

impl CategoryFilter {
    /// Legacy clients send category 0 to mean every category. Any other id,
    /// even one no category uses, selects that category.
    fn from_id(id: i64) -> Self {
        match id {
            0 => Self::All,
            id => Self::Category(id),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = InvalidFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed
            .parse::<i64>()
            .map(Self::from_id)
            .map_err(|_| InvalidFilter::Malformed(format!("{s:?}")))
    }
}

impl TryFrom<&Value> for CategoryFilter {
    type Error = InvalidFilter;

    /// Accepts `"all"`, an integer id (number or numeric string), or the
    /// `{"id": ..., "type": ...}` object the quiz front end posts.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => s.parse(),
            Value::Number(n) => n
                .as_i64()
                .map(Self::from_id)
                .ok_or_else(|| InvalidFilter::Malformed(n.to_string())),
            Value::Object(fields) => match fields.get("id") {
                Some(Value::Object(_)) | None => Err(InvalidFilter::Malformed(value.to_string())),
                Some(id) => Self::try_from(id),
            },
            Value::Null => Err(InvalidFilter::Missing),
            other => Err(InvalidFilter::Malformed(other.to_string())),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(id) => write!(f, "{id}"),
        }
    }
}

/// Ids already served in one quiz session, in serving order.
/// Held by the caller and passed back on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeenSet(Vec<i64>);

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, id: i64) {
        self.0.push(id);
    }
}

impl From<Vec<i64>> for SeenSet {
    fn from(ids: Vec<i64>) -> Self {
        Self(ids)
    }
}

/// Outcome of drawing the next quiz question
#[derive(Debug, Clone, PartialEq)]
pub struct QuizDraw {
    /// `None` once every candidate has been served
    pub question: Option<Question>,
    pub seen: SeenSet,
}

/// Pick one unseen candidate uniformly at random and record it as seen.
///
/// When nothing is left the seen-set comes back untouched.
pub fn draw<R: Rng>(
    candidates: Vec<Question>,
    mut seen: SeenSet,
    rng: &mut R,
) -> QuizDraw {
    let excluded: HashSet<i64> = seen.ids().iter().copied().collect();
    let mut eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !excluded.contains(&q.id))
        .collect();

    if eligible.is_empty() {
        return QuizDraw {
            question: None,
            seen,
        };
    }

    let question = eligible.swap_remove(rng.random_range(0..eligible.len()));
    seen.push(question.id);

    QuizDraw {
        question: Some(question),
        seen,
    }
}

/// Read side of the question store the quiz draws from
pub trait QuestionSource {
    type Error;

    /// Questions matching `filter`, ordered by id ascending
    fn list_questions(
        &self,
        filter: CategoryFilter,
    ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send;
}

/// Serves non-repeating random questions from a [`QuestionSource`]
#[derive(Clone)]
pub struct QuestionPool<S> {
    source: S,
}

impl<S: QuestionSource> QuestionPool<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn next_question(
        &self,
        filter: CategoryFilter,
        seen: SeenSet,
    ) -> Result<QuizDraw, S::Error> {
        let candidates = self.source.list_questions(filter).await?;
        debug!(
            %filter,
            candidates = candidates.len(),
            seen = seen.len(),
            "Drawing quiz question"
        );
        Ok(draw(candidates, seen, &mut rand::rng()))
    }
}
