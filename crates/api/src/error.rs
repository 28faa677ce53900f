use core::fmt::{self, Display};
use hyper::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The request body is not the JSON we expected.
    InvalidBody,
    CreateFailed,
    QuizNotFound,
    /// Any store error while scoring an answer, missing quiz or question included.
    SubmitFailed,
    ResultsNotFound,
    /// Failed to serialize the response.
    Encoding,
    MethodNotAllowed,
    UnknownRoute,
}

impl Error {
    pub const fn status(self) -> StatusCode {
        match self {
            Self::InvalidBody => StatusCode::BAD_REQUEST,
            Self::QuizNotFound | Self::ResultsNotFound | Self::UnknownRoute => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::CreateFailed | Self::SubmitFailed | Self::Encoding => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidBody => "Invalid request body",
            Self::CreateFailed => "Failed to create quiz",
            Self::QuizNotFound => "Quiz not found",
            Self::SubmitFailed => "Failed to submit answer",
            Self::ResultsNotFound => "Results not found",
            Self::Encoding => "Failed to encode response",
            Self::MethodNotAllowed => "Method not allowed",
            Self::UnknownRoute => "Not found",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
