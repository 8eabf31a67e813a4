//! Bounded request-body reader.
//!
//! Accumulates the body chunk by chunk into a buffer owned by the request and
//! stops reading as soon as the cap is crossed. The cap counts characters,
//! tallied from UTF-8 lead bytes so a sequence split across chunks is counted
//! once. Bytes are only parsed once the stream has ended.

use std::fmt::Display;

use axum::body::Body;
use bytes::{Bytes, BytesMut};
use futures_util::{Stream, StreamExt};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Largest accepted search payload, in characters.
pub const MAX_BODY_CHARS: usize = 1_000_000;

/// Widest UTF-8 encoding of one character.
const MAX_UTF8_WIDTH: usize = 4;

/// Reads an axum request body as JSON under [`MAX_BODY_CHARS`].
pub async fn read_body(body: Body) -> Result<Value, AppError> {
    read_json_body(body.into_data_stream(), MAX_BODY_CHARS).await
}

/// Drains `stream` into a buffer of at most `limit` characters and parses it
/// as JSON.
///
/// - an empty stream yields `{}`
/// - crossing `limit` characters, or `4 * limit` bytes, fails with
///   `PayloadTooLarge` and drops the stream unread
/// - malformed JSON fails with `InvalidBody`
/// - a stream error fails with `Transport`, keeping the cause's message
pub async fn read_json_body<S, E>(stream: S, limit: usize) -> Result<Value, AppError>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Display,
{
    let mut stream = std::pin::pin!(stream);
    let mut buffer = BytesMut::new();
    let mut chars = 0usize;
    let byte_ceiling = limit.saturating_mul(MAX_UTF8_WIDTH);

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| AppError::Transport(e.to_string()))?;
        chars += count_chars(&chunk);
        let bytes = buffer.len() + chunk.len();
        if chars > limit || bytes > byte_ceiling {
            tracing::debug!(chars, bytes, limit, "Request body exceeds limit, aborting read");
            return Err(AppError::PayloadTooLarge);
        }
        buffer.extend_from_slice(&chunk);
    }

    if buffer.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(&buffer).map_err(|_| AppError::InvalidBody)
}

/// Characters started in `chunk`: every byte that is not a UTF-8 continuation byte.
fn count_chars(chunk: &[u8]) -> usize {
    chunk.iter().filter(|&&b| b & 0xC0 != 0x80).count()
}
