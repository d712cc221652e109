//! Messages API service
//!
//! One-shot and streamed chat completions against the `/messages` endpoint.
//!
//! Both response encodings are decoded the same way: the payload's `type`
//! tag is read on its own first, and only then is the payload decoded into
//! the shape that tag names.

mod frame;
mod request;
mod service;
mod stream;
mod types;


pub use frame::{data_payload, parse_frame, Frame, CONTENT_BLOCK_DELTA, DATA_PREFIX};
pub use request::{build_request, PreparedRequest};
pub use service::{MessagesService, MessagesServiceImpl};
pub use stream::MessageStream;
pub use types::{ChatRequest, ChatResponse, ContentBlock, Message};
