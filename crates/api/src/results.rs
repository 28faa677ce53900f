use crate::{
    error::{Error, Result},
    util::reply,
};
use db::Storage;
use hyper::StatusCode;

pub fn try_fetch<S: Storage + ?Sized>(quiz: &str, user: &str, store: &S) -> Result<reply::Reply> {
    let result = store.get_results(quiz, user).map_err(|err| {
        log::warn!("No results for {user} in quiz {quiz}: {err}.");
        Error::ResultsNotFound
    })?;
    let bytes = serde_json::to_vec(&result).map_err(|_| Error::Encoding)?;
    Ok(reply::json(StatusCode::OK, bytes))
}
