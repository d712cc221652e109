//! Server-sent event frame parsing.
//!
//! Only lines starting with `data: ` carry a payload. Each payload is a JSON
//! object whose `type` field decides whether it is decoded any further: only
//! `content_block_delta` frames are, every other tag is reported as skipped.

use super::types::{ContentBlock, Envelope};
use crate::errors::{AnthropicError, AnthropicResult};
use serde::Deserialize;

/// Prefix that marks a payload-carrying SSE line.
pub const DATA_PREFIX: &[u8] = b"data: ";

/// Tag of the frames that carry generated text.
pub const CONTENT_BLOCK_DELTA: &str = "content_block_delta";

/// Outcome of parsing one data frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// A content fragment
    Delta(ContentBlock),
    /// Any other frame, identified by its tag
    Skipped(String),
}

#[derive(Debug, Deserialize)]
struct ContentBlockDeltaFrame {
    #[allow(dead_code)]
    #[serde(default)]
    index: usize,
    delta: ContentBlock,
}

/// Returns the payload of a `data: ` line with its line terminator removed,
/// or `None` for any other line (blank, comment, `event:`, `id:`, ...).
pub fn data_payload(line: &[u8]) -> Option<&[u8]> {
    let payload = line.strip_prefix(DATA_PREFIX)?;
    let payload = payload.strip_suffix(b"\n").unwrap_or(payload);
    Some(payload.strip_suffix(b"\r").unwrap_or(payload))
}

/// Parses one stripped data payload.
///
/// The envelope tag is always read first; the payload is decoded as a delta
/// only when the tag says it is one. Malformed JSON at either step is an
/// error.
pub fn parse_frame(payload: &[u8]) -> AnthropicResult<Frame> {
    let envelope = Envelope::peek(payload)?;

    if envelope.kind != CONTENT_BLOCK_DELTA {
        return Ok(Frame::Skipped(envelope.kind));
    }

    let frame: ContentBlockDeltaFrame =
        serde_json::from_slice(payload).map_err(AnthropicError::decode)?;
    Ok(Frame::Delta(frame.delta))
}
