use core::fmt::Display;
use http_body_util::Full;
use hyper::{
    body::Bytes,
    header::{HeaderValue, CONTENT_TYPE},
    Response, StatusCode,
};

pub type Reply = Response<Full<Bytes>>;

fn with_type(status: StatusCode, mime: &'static str, body: Bytes) -> Reply {
    let mut res = Response::new(Full::new(body));
    *res.status_mut() = status;
    assert!(res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(mime)).is_none());
    res
}

/// Responds with an already-serialized JSON payload.
pub fn json(status: StatusCode, body: impl Into<Bytes>) -> Reply {
    with_type(status, "application/json", body.into())
}

/// Responds with a single line of plain text.
pub fn text(status: StatusCode, message: impl Display) -> Reply {
    let line = alloc::format!("{message}\n");
    with_type(status, "text/plain; charset=utf-8", line.into())
}
