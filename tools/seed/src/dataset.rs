use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Contents of a trivia seed file.
///
/// ```json
/// {
///   "categories": ["Science", "Art"],
///   "questions": [
///     {"question": "Who discovered penicillin?", "answer": "Alexander Fleming",
///      "difficulty": 3, "category": "Science"}
///   ]
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct TriviaDataset {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub questions: Vec<QuestionEntry>,
}

/// A question as written in the seed file, naming its category by label
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionEntry {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: String,
}

impl QuestionEntry {
    pub fn is_valid(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty() && self.difficulty >= 1
    }
}

pub fn parse_dataset(path: &Path) -> Result<TriviaDataset, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_categories_and_questions() {
        let json = r#"{
            "categories": ["Science"],
            "questions": [
                {"question": "Who discovered penicillin?", "answer": "Alexander Fleming",
                 "difficulty": 3, "category": "Science"}
            ]
        }"#;
        let dataset: TriviaDataset = serde_json::from_str(json).unwrap();

        assert_eq!(dataset.categories, vec!["Science"]);
        assert_eq!(dataset.questions.len(), 1);
        assert_eq!(dataset.questions[0].category, "Science");
        assert!(dataset.questions[0].is_valid());
    }

    #[test]
    fn sections_are_optional() {
        let dataset: TriviaDataset = serde_json::from_str("{}").unwrap();
        assert!(dataset.categories.is_empty());
        assert!(dataset.questions.is_empty());
    }

    #[test]
    fn blank_text_or_zero_difficulty_is_invalid() {
        let entry = QuestionEntry {
            question: " ".to_string(),
            answer: "A".to_string(),
            difficulty: 1,
            category: "Science".to_string(),
        };
        assert!(!entry.is_valid());

        let entry = QuestionEntry {
            question: "Q?".to_string(),
            difficulty: 0,
            ..entry
        };
        assert!(!entry.is_valid());
    }

    #[test]
    fn bundled_dataset_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/trivia.json");
        let dataset = parse_dataset(&path).unwrap();

        assert!(!dataset.categories.is_empty());
        assert!(dataset.questions.iter().all(QuestionEntry::is_valid));
        assert!(
            dataset
                .questions
                .iter()
                .all(|q| dataset.categories.contains(&q.category))
        );
    }
}
