use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};

const fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// A named collection of questions with a marking policy.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Quiz {
    /// Caller-supplied unique identifier.
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
    /// Whether wrong answers subtract [`Quiz::penalty`] from the score.
    pub is_negative_marking: bool,
    /// Amount deducted per wrong answer when negative marking is enabled.
    pub penalty: f64,
}

impl Quiz {
    /// Finds the first question with the given identifier.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    /// Identifier which is unique within its quiz.
    pub id: String,
    pub text: String,
    /// Possible answers to select from.
    pub options: Vec<String>,
    /// Index of the option with the correct answer. Omitted from the JSON when zero.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub correct_option: i64,
    /// Marks awarded for a correct answer.
    pub marks: i64,
}

impl Question {
    /// Text of the correct option, if the index actually points into the options.
    pub fn correct_text(&self) -> Option<&str> {
        let index = usize::try_from(self.correct_option).ok()?;
        self.options.get(index).map(String::as_str)
    }
}
