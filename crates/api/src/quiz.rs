use crate::{
    error::{Error, Result},
    util::{self, reply},
};
use db::Storage;
use hyper::{body::Body, StatusCode};
use model::Quiz;

const CREATED: &str = r#"{"message":"Quiz created successfully"}"#;

/// Hides every answer-revealing field before the quiz leaves the service.
pub fn redact(quiz: &mut Quiz) {
    for question in &mut quiz.questions {
        question.correct_option = 0;
        question.marks = 0;
    }
}

pub async fn try_create<B, S>(body: B, store: &S) -> Result<reply::Reply>
where
    B: Body,
    B::Error: Into<util::BoxError>,
    S: Storage + ?Sized,
{
    let bytes = util::collect(body).await?;
    let quiz: Quiz = serde_json::from_slice(&bytes).map_err(|_| Error::InvalidBody)?;
    drop(bytes);

    let id = quiz.id.clone();
    let count = quiz.questions.len();
    store.create_quiz(quiz).map_err(|err| {
        log::error!("Cannot create quiz {id}: {err}.");
        Error::CreateFailed
    })?;

    log::info!("Created quiz {id} with {count} questions.");
    Ok(reply::json(StatusCode::CREATED, CREATED))
}

pub fn try_fetch<S: Storage + ?Sized>(id: &str, store: &S) -> Result<reply::Reply> {
    let mut quiz = store.get_quiz(id).map_err(|_| Error::QuizNotFound)?;
    redact(&mut quiz);
    let bytes = serde_json::to_vec(&quiz).map_err(|_| Error::Encoding)?;
    Ok(reply::json(StatusCode::OK, bytes))
}
