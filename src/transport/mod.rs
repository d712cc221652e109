//! HTTP transport layer.
//!
//! The transport only moves bytes: it never interprets status codes or
//! response bodies. That is left to the messages service.

mod http_transport;

pub use http_transport::{
    ByteStream, HttpResponse, HttpTransport, ReqwestTransport, StreamingResponse,
};
