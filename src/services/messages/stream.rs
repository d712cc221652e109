//! Streaming session for the Messages API

use super::frame::{self, Frame};
use super::types::{ChatResponse, ContentBlock};
use crate::errors::AnthropicResult;
use crate::transport::ByteStream;
use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use tracing::{debug, trace};

/// An open streamed response.
///
/// Owns the response body until [`close`](Self::close) is called or the
/// session is dropped. Each [`recv`](Self::recv) yields at most one content
/// delta; once the body is exhausted every further call reports end of
/// stream without touching the body again.
pub struct MessageStream {
    body: ByteStream,
    buffer: BytesMut,
    // Bytes of `buffer` already known to hold no newline.
    scanned: usize,
    body_exhausted: bool,
    finished: bool,
}

impl MessageStream {
    /// Wrap a live response body. Nothing is read until the first `recv`.
    pub fn new(body: ByteStream) -> Self {
        Self {
            body,
            buffer: BytesMut::new(),
            scanned: 0,
            body_exhausted: false,
            finished: false,
        }
    }

    /// Returns true once end of stream has been reported
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Pull the next content delta.
    ///
    /// Returns `Ok(None)` at end of stream. Lines without the `data: `
    /// prefix and frames other than content deltas are consumed silently.
    /// An error leaves the session open; the caller decides whether to keep
    /// pulling or close it.
    pub async fn recv(&mut self) -> AnthropicResult<Option<ChatResponse>> {
        Ok(self.recv_delta().await?.map(ChatResponse::from_delta))
    }

    async fn recv_delta(&mut self) -> AnthropicResult<Option<ContentBlock>> {
        if self.finished {
            return Ok(None);
        }

        loop {
            let Some(line) = self.next_line().await? else {
                debug!("Message stream reached end of body");
                self.finished = true;
                return Ok(None);
            };

            let Some(payload) = frame::data_payload(&line) else {
                trace!(len = line.len(), "Skipping non-data line");
                continue;
            };

            match frame::parse_frame(payload)? {
                Frame::Delta(delta) => return Ok(Some(delta)),
                Frame::Skipped(event_type) => {
                    trace!(event_type = %event_type, "Skipping stream event");
                }
            }
        }
    }

    /// Next newline-terminated line, or the unterminated remainder once the
    /// body has ended. `None` when nothing is left.
    async fn next_line(&mut self) -> AnthropicResult<Option<Bytes>> {
        loop {
            if let Some(pos) = self.buffer[self.scanned..]
                .iter()
                .position(|&b| b == b'\n')
            {
                let end = self.scanned + pos + 1;
                self.scanned = 0;
                return Ok(Some(self.buffer.split_to(end).freeze()));
            }
            self.scanned = self.buffer.len();

            if self.body_exhausted {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                self.scanned = 0;
                return Ok(Some(self.buffer.split().freeze()));
            }

            match self.body.next().await {
                Some(chunk) => self.buffer.extend_from_slice(&chunk?),
                None => self.body_exhausted = true,
            }
        }
    }

    /// Drain the session, concatenating the text of every delta.
    pub async fn collect_text(mut self) -> AnthropicResult<String> {
        let mut text = String::new();
        while let Some(delta) = self.recv_delta().await? {
            text.push_str(&delta.text);
        }
        self.close()?;
        Ok(text)
    }

    /// Adapt the session into a `Stream` of content deltas.
    ///
    /// The stream ends at end of body; the body is released when the
    /// returned stream is dropped.
    pub fn into_stream(self) -> impl Stream<Item = AnthropicResult<ContentBlock>> + Send {
        futures::stream::unfold(self, |mut session| async move {
            match session.recv_delta().await {
                Ok(Some(delta)) => Some((Ok(delta), session)),
                Ok(None) => None,
                Err(e) => Some((Err(e), session)),
            }
        })
    }

    /// Release the response body.
    ///
    /// Consumes the session, so the body is released exactly once. Safe to
    /// call at any point, including after end of stream.
    pub fn close(self) -> AnthropicResult<()> {
        debug!(finished = self.finished, "Closing message stream");
        drop(self.body);
        Ok(())
    }
}

impl std::fmt::Debug for MessageStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageStream")
            .field("buffered", &self.buffer.len())
            .field("body_exhausted", &self.body_exhausted)
            .field("finished", &self.finished)
            .finish()
    }
}
