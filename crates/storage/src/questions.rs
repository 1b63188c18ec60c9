use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Result, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Technical,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::SoftSkills => "Soft Skills",
        }
    }
}

/// A multiple-choice question. `correct` is an index into `options` and is
/// never serialized towards candidates, only `QuestionView` is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub text: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub category: Category,
}

impl Question {
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct
    }

    pub fn option_text(&self, selected: usize) -> Option<&str> {
        self.options.get(selected).map(String::as_str)
    }
}

/// Candidate-facing projection of a question, without the answer key.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionView {
    /// 1-based position in the test, for "question X of Y" displays.
    pub number: usize,
    pub id: i32,
    pub text: String,
    pub options: Vec<String>,
    pub category: Category,
}

/// Read-only question bank, loaded once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// The default bank: 3 technical and 2 soft-skills questions.
    pub fn builtin() -> Self {
        let questions = vec![
            Question {
                id: 1,
                text: "What does HTML stand for?".into(),
                options: vec![
                    "Hyper Text Markup Language".into(),
                    "High Tech Modern Language".into(),
                    "Home Tool Markup Language".into(),
                    "Hyperlink Text Management Language".into(),
                ],
                correct: 0,
                category: Category::Technical,
            },
            Question {
                id: 2,
                text: "Which of the following is not a programming language?".into(),
                options: vec![
                    "Python".into(),
                    "JavaScript".into(),
                    "HTML".into(),
                    "Java".into(),
                ],
                correct: 2,
                category: Category::Technical,
            },
            Question {
                id: 3,
                text: "What is responsive design?".into(),
                options: vec![
                    "A design that loads quickly".into(),
                    "A design that adapts to different screen sizes".into(),
                    "A design that is interactive".into(),
                    "A design that uses a lot of animation".into(),
                ],
                correct: 1,
                category: Category::Technical,
            },
            Question {
                id: 4,
                text: "How do you handle conflict within a team?".into(),
                options: vec![
                    "Avoid the conflict".into(),
                    "Push my own opinion through".into(),
                    "Listen to every side and look for a shared solution".into(),
                    "Hand it over to a manager".into(),
                ],
                correct: 2,
                category: Category::SoftSkills,
            },
            Question {
                id: 5,
                text: "What do you do when facing a tight deadline?".into(),
                options: vec![
                    "Panic and stress out".into(),
                    "Postpone the work".into(),
                    "Set priorities and manage my time".into(),
                    "Ask for an extension".into(),
                ],
                correct: 2,
                category: Category::SoftSkills,
            },
        ];

        Self::validated(questions).expect("builtin question bank is well-formed")
    }

    /// Load the bank from a JSON file, or fall back to the built-in set.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    StorageError::QuestionBank(format!(
                        "cannot read {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Self::from_json(&raw)
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let questions: Vec<Question> = serde_json::from_str(raw)
            .map_err(|e| StorageError::QuestionBank(format!("invalid question file: {e}")))?;
        Self::validated(questions)
    }

    fn validated(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(StorageError::QuestionBank("the bank is empty".into()));
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(StorageError::QuestionBank(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }
            if question.options.len() < 2 {
                return Err(StorageError::QuestionBank(format!(
                    "question {} needs at least two options",
                    question.id
                )));
            }
            if question.correct >= question.options.len() {
                return Err(StorageError::QuestionBank(format!(
                    "question {} has correct index {} out of range",
                    question.id, question.correct
                )));
            }
        }

        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn view(&self, index: usize) -> Option<QuestionView> {
        self.questions.get(index).map(|q| QuestionView {
            number: index + 1,
            id: q.id,
            text: q.text.clone(),
            options: q.options.clone(),
            category: q.category,
        })
    }

    /// Distinct categories in bank order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .map(|q| q.category)
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_is_well_formed() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 5);
        let ids: Vec<i32> = (0..bank.len()).map(|i| bank.get(i).unwrap().id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            bank.categories(),
            vec![Category::Technical, Category::SoftSkills]
        );
    }

    #[test]
    fn correctness_compares_selected_index() {
        let bank = QuestionBank::builtin();
        let html = bank.get(0).unwrap();
        assert!(html.is_correct(0));
        assert!(!html.is_correct(1));
        assert_eq!(html.option_text(2), Some("Home Tool Markup Language"));
        assert_eq!(html.option_text(9), None);
    }

    #[test]
    fn view_does_not_leak_the_answer_key() {
        let bank = QuestionBank::builtin();
        let view = bank.view(0).unwrap();
        assert_eq!(view.number, 1);
        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("correct"));
    }

    #[test]
    fn rejects_malformed_banks() {
        assert!(QuestionBank::from_json("[]").is_err());

        let out_of_range = r#"[{
            "id": 1,
            "text": "q",
            "options": ["a", "b"],
            "correct": 2,
            "category": "Technical"
        }]"#;
        assert!(QuestionBank::from_json(out_of_range).is_err());

        let duplicate_ids = r#"[
            {"id": 1, "text": "q", "options": ["a", "b"], "correct": 0, "category": "Technical"},
            {"id": 1, "text": "r", "options": ["a", "b"], "correct": 1, "category": "Soft Skills"}
        ]"#;
        assert!(QuestionBank::from_json(duplicate_ids).is_err());

        let single_option =
            r#"[{"id": 1, "text": "q", "options": ["a"], "correct": 0, "category": "Technical"}]"#;
        assert!(QuestionBank::from_json(single_option).is_err());
    }

    #[test]
    fn loads_custom_banks_from_json() {
        let raw = r#"[
            {"id": 10, "text": "2 + 2?", "options": ["3", "4"], "correct": 1, "category": "Technical"}
        ]"#;
        let bank = QuestionBank::from_json(raw).unwrap();
        assert_eq!(bank.len(), 1);
        assert!(bank.get(0).unwrap().is_correct(1));
    }
}
