#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod answer;
mod error;
mod quiz;
mod results;
mod route;
mod util;

pub use quiz::redact;
pub use util::{reply::Reply, BoxError};

use db::Storage;
use hyper::{body::Body, Method, Request};
use route::Route;

/// Routes a request to its handler. Failures never escape: they become a
/// status code with a one-line plain text body.
pub async fn try_respond<B, S>(req: Request<B>, store: &S) -> Reply
where
    B: Body,
    B::Error: Into<util::BoxError>,
    S: Storage + ?Sized,
{
    let (parts, body) = req.into_parts();
    let method = parts.method;
    let path = parts.uri.path();

    let result = match Route::parse(path) {
        Some(Route::Quizzes) if method == Method::POST => quiz::try_create(body, store).await,
        Some(Route::Quiz(id)) if method == Method::GET => quiz::try_fetch(&id, store),
        Some(Route::Answer { quiz, user }) if method == Method::POST => {
            answer::try_submit(body, &quiz, &user, store).await
        }
        Some(Route::Results { quiz, user }) if method == Method::GET => results::try_fetch(&quiz, &user, store),
        Some(_) => Err(error::Error::MethodNotAllowed),
        None => Err(error::Error::UnknownRoute),
    };

    let res = match result {
        Ok(res) => res,
        Err(err) => util::reply::text(err.status(), err),
    };

    log::info!("{method} {path} -> {}", res.status());
    res
}
