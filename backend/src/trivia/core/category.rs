use serde::Serialize;
use std::collections::BTreeMap;

/// A question category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub label: String,
}

/// Categories keyed by id, serialized as a JSON object `{"1": "Science", ...}`
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.label.clone()))
        .collect()
}
