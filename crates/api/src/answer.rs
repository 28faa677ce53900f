use crate::{
    error::{Error, Result},
    util::{self, reply},
};
use db::Storage;
use hyper::{body::Body, StatusCode};
use model::Answer;

pub async fn try_submit<B, S>(body: B, quiz: &str, user: &str, store: &S) -> Result<reply::Reply>
where
    B: Body,
    B::Error: Into<util::BoxError>,
    S: Storage + ?Sized,
{
    let bytes = util::collect(body).await?;
    let answer: Answer = serde_json::from_slice(&bytes).map_err(|_| Error::InvalidBody)?;
    drop(bytes);

    let verdict = store.submit_answer(quiz, user, answer).map_err(|err| {
        log::warn!("Rejected answer from {user} to quiz {quiz}: {err}.");
        Error::SubmitFailed
    })?;

    let bytes = serde_json::to_vec(&verdict).map_err(|_| Error::Encoding)?;
    Ok(reply::json(StatusCode::OK, bytes))
}
