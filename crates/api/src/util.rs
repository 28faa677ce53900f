pub mod reply;

use crate::error::{Error, Result};
use http_body_util::{BodyExt, Limited};
use hyper::body::{Body, Bytes};

/// Error type a request body must convert into so its size can be limited.
pub type BoxError = alloc::boxed::Box<dyn core::error::Error + Send + Sync>;

/// Largest request body we are willing to buffer.
pub const MAX_BODY_SIZE: usize = 1 << 20;

/// Buffers the entire request body, rejecting anything above [`MAX_BODY_SIZE`].
pub async fn collect<B>(body: B) -> Result<Bytes>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let collected = Limited::new(body, MAX_BODY_SIZE).collect().await.map_err(|_| Error::InvalidBody)?;
    Ok(collected.to_bytes())
}
