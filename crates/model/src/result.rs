use alloc::{collections::BTreeMap, string::String};
use serde::{Deserialize, Serialize};

/// A user's selection for a single question.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub question_id: String,
    /// Index into the question's options. Never validated, only compared.
    pub selected_option: i64,
    /// Output-only. Overwritten by the store on submission.
    #[serde(default)]
    pub is_correct: bool,
}

/// Running score and latest answers of one user for one quiz.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct QuizResult {
    pub quiz_id: String,
    pub user_id: String,
    /// May go negative under negative marking.
    pub score: f64,
    /// Most recent answer per question identifier.
    pub answers: BTreeMap<String, Answer>,
}

impl QuizResult {
    pub fn new(quiz_id: String, user_id: String) -> Self {
        Self { quiz_id, user_id, score: 0.0, answers: BTreeMap::new() }
    }
}

/// Outcome of a single answer submission.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Verdict {
    pub is_correct: bool,
    /// Text of the correct option. Only revealed for incorrect answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}
