pub mod error;

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

pub use model::{Answer, Question, Quiz, QuizResult, Verdict};

/// The four operations the transport layer needs from a quiz store.
pub trait Storage {
    /// Inserts the quiz, replacing any quiz with the same identifier.
    fn create_quiz(&self, quiz: Quiz) -> error::Result<()>;
    /// Returns the full quiz, including correct options and marks.
    fn get_quiz(&self, id: &str) -> error::Result<Quiz>;
    /// Scores the answer and records it as the user's latest answer to that question.
    fn submit_answer(&self, quiz_id: &str, user_id: &str, answer: Answer) -> error::Result<Verdict>;
    /// Returns a snapshot of the user's result for the quiz.
    fn get_results(&self, quiz_id: &str, user_id: &str) -> error::Result<QuizResult>;
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn create_quiz(&self, quiz: Quiz) -> error::Result<()> {
        S::create_quiz(self, quiz)
    }

    fn get_quiz(&self, id: &str) -> error::Result<Quiz> {
        S::get_quiz(self, id)
    }

    fn submit_answer(&self, quiz_id: &str, user_id: &str, answer: Answer) -> error::Result<Verdict> {
        S::submit_answer(self, quiz_id, user_id, answer)
    }

    fn get_results(&self, quiz_id: &str, user_id: &str) -> error::Result<QuizResult> {
        S::get_results(self, quiz_id, user_id)
    }
}

#[derive(Default)]
struct Tables {
    quizzes: HashMap<String, Quiz>,
    /// Keyed by quiz identifier, then by user identifier.
    results: HashMap<String, HashMap<String, QuizResult>>,
}

/// In-memory store of quizzes and per-user results. A single reader/writer
/// lock guards both tables, so every submission is atomic with respect to
/// every other submission.
#[derive(Default)]
pub struct ScoreStore(RwLock<Tables>);

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> error::Result<RwLockReadGuard<'_, Tables>> {
        self.0.read().map_err(|_| error::Error::Fatal)
    }

    fn write(&self) -> error::Result<RwLockWriteGuard<'_, Tables>> {
        self.0.write().map_err(|_| error::Error::Fatal)
    }
}

impl Storage for ScoreStore {
    fn create_quiz(&self, quiz: Quiz) -> error::Result<()> {
        let mut tables = self.write()?;
        tables.quizzes.insert(quiz.id.clone(), quiz);
        Ok(())
    }

    fn get_quiz(&self, id: &str) -> error::Result<Quiz> {
        self.read()?.quizzes.get(id).cloned().ok_or(error::Error::QuizNotFound)
    }

    fn submit_answer(&self, quiz_id: &str, user_id: &str, mut answer: Answer) -> error::Result<Verdict> {
        let mut guard = self.write()?;
        let Tables { quizzes, results } = &mut *guard;

        let quiz = quizzes.get(quiz_id).ok_or(error::Error::QuizNotFound)?;
        let question = quiz.question(&answer.question_id).ok_or(error::Error::QuestionNotFound)?;

        let is_correct = answer.selected_option == question.correct_option;
        answer.is_correct = is_correct;

        let result = results
            .entry(quiz_id.to_owned())
            .or_default()
            .entry(user_id.to_owned())
            .or_insert_with(|| QuizResult::new(quiz_id.to_owned(), user_id.to_owned()));

        // Earlier deltas for the same question are never reversed.
        if is_correct {
            result.score += question.marks as f64;
        } else if quiz.is_negative_marking {
            result.score -= quiz.penalty;
        }
        result.answers.insert(answer.question_id.clone(), answer);

        if is_correct {
            return Ok(Verdict { is_correct, correct_answer: None });
        }

        // The submission is already recorded at this point, even if the question itself is broken.
        let text = question.correct_text().ok_or(error::Error::InvalidCorrectOption)?;
        Ok(Verdict { is_correct, correct_answer: Some(text.to_owned()) })
    }

    fn get_results(&self, quiz_id: &str, user_id: &str) -> error::Result<QuizResult> {
        self.read()?
            .results
            .get(quiz_id)
            .ok_or(error::Error::QuizResultsNotFound)?
            .get(user_id)
            .cloned()
            .ok_or(error::Error::UserResultsNotFound)
    }
}
