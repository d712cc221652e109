//! Test fixtures and helper data.

use serde_json::json;

/// Sample API key for testing
pub const TEST_API_KEY: &str = "sk-ant-test123456789012345";

/// Sample model ID
pub const TEST_MODEL: &str = "claude-3-opus-20240229";

/// A complete one-shot message response
pub fn sample_message_response() -> serde_json::Value {
    json!({
        "id": "msg_01XFDUDYJgAACzvnptvVoYEL",
        "type": "message",
        "role": "assistant",
        "content": [
            {
                "type": "text",
                "text": "Hello! How can I assist you today?"
            }
        ],
        "model": TEST_MODEL,
        "stop_reason": "end_turn",
        "stop_sequence": null,
        "usage": {
            "input_tokens": 10,
            "output_tokens": 20
        }
    })
}

/// An error payload as the API sends it
pub fn sample_error_response(error_type: &str, message: &str) -> serde_json::Value {
    json!({
        "type": "error",
        "error": {
            "type": error_type,
            "message": message
        }
    })
}

/// One SSE event with both `event:` and `data:` lines and the blank separator
pub fn sse_event(event_type: &str, data: serde_json::Value) -> String {
    format!("event: {}\ndata: {}\n\n", event_type, data)
}

/// A `content_block_delta` event carrying `text`
pub fn text_delta_event(index: usize, text: &str) -> String {
    sse_event(
        "content_block_delta",
        json!({
            "type": "content_block_delta",
            "index": index,
            "delta": {"type": "text_delta", "text": text}
        }),
    )
}

/// A keep-alive `ping` event
pub fn ping_event() -> String {
    sse_event("ping", json!({"type": "ping"}))
}

/// The `message_start` event opening a stream
pub fn message_start_event() -> String {
    sse_event(
        "message_start",
        json!({
            "type": "message_start",
            "message": {
                "id": "msg_01XFDUDYJgAACzvnptvVoYEL",
                "type": "message",
                "role": "assistant",
                "content": [],
                "model": TEST_MODEL,
                "stop_reason": null,
                "usage": {"input_tokens": 10, "output_tokens": 1}
            }
        }),
    )
}

/// A full stream producing `texts` as deltas of a single text block
pub fn sample_stream(texts: &[&str]) -> String {
    let mut body = message_start_event();
    body.push_str(&sse_event(
        "content_block_start",
        json!({
            "type": "content_block_start",
            "index": 0,
            "content_block": {"type": "text", "text": ""}
        }),
    ));
    body.push_str(&ping_event());
    for text in texts {
        body.push_str(&text_delta_event(0, text));
    }
    body.push_str(&sse_event(
        "content_block_stop",
        json!({"type": "content_block_stop", "index": 0}),
    ));
    body.push_str(&sse_event(
        "message_delta",
        json!({
            "type": "message_delta",
            "delta": {"stop_reason": "end_turn", "stop_sequence": null},
            "usage": {"output_tokens": 15}
        }),
    ));
    body.push_str(&sse_event("message_stop", json!({"type": "message_stop"})));
    body
}
