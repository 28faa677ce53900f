use core::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No quiz is registered under the requested identifier.
    QuizNotFound,
    /// The quiz exists but has no question with the answered identifier.
    QuestionNotFound,
    /// Nobody has submitted an answer to this quiz yet.
    QuizResultsNotFound,
    /// Others have answered this quiz, but not this user.
    UserResultsNotFound,
    /// The question's correct option does not index into its options.
    InvalidCorrectOption,
    /// Unrecoverable error. The store lock was poisoned.
    Fatal,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::QuizNotFound => "quiz not found",
            Self::QuestionNotFound => "question not found",
            Self::QuizResultsNotFound => "no results found for this quiz",
            Self::UserResultsNotFound => "no results found for this user",
            Self::InvalidCorrectOption => "invalid correct option",
            Self::Fatal => "the store is in an unrecoverable state",
        })
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
