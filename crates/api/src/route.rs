use alloc::{borrow::Cow, vec::Vec};
use percent_encoding::percent_decode_str;

/// Endpoints recognized by the service, with their percent-decoded path parameters.
#[derive(Debug, PartialEq, Eq)]
pub enum Route<'p> {
    /// `/quiz`
    Quizzes,
    /// `/quiz/{id}`
    Quiz(Cow<'p, str>),
    /// `/quiz/{quiz}/answer/{user}`
    Answer { quiz: Cow<'p, str>, user: Cow<'p, str> },
    /// `/quiz/{quiz}/results/{user}`
    Results { quiz: Cow<'p, str>, user: Cow<'p, str> },
}

/// Decodes a single path segment. Fails if the decoded bytes are not UTF-8.
fn decode(segment: &str) -> Option<Cow<'_, str>> {
    percent_decode_str(segment).decode_utf8().ok()
}

impl<'p> Route<'p> {
    pub fn parse(path: &'p str) -> Option<Self> {
        let rest = path.strip_prefix('/')?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let segments: Vec<_> = rest.split('/').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return None;
        }

        Some(match *segments.as_slice() {
            ["quiz"] => Self::Quizzes,
            ["quiz", id] => Self::Quiz(decode(id)?),
            ["quiz", quiz, "answer", user] => Self::Answer { quiz: decode(quiz)?, user: decode(user)? },
            ["quiz", quiz, "results", user] => Self::Results { quiz: decode(quiz)?, user: decode(user)? },
            _ => return None,
        })
    }
}
