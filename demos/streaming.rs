//! Streaming chat completion example
//!
//! Prints text as it is generated.
//!
//! ```bash
//! export ANTHROPIC_API_KEY=sk-ant-api03-...
//! cargo run --example streaming
//! ```

use integrations_anthropic_chat::{
    create_client_from_env, AnthropicClient, ChatRequest, LogLevel, LoggingConfig, Message,
};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    LoggingConfig::new().with_level(LogLevel::Warn).init()?;

    let client = create_client_from_env()?;

    let request = ChatRequest::new("claude-3-opus-20240229", 2048).with_message(Message::user(
        "Write a short story about a robot learning to paint. Keep it under 200 words.",
    ));

    let mut stream = client.messages().create_message_stream(request).await?;

    while let Some(response) = stream.recv().await? {
        print!("{}", response.text());
        io::stdout().flush()?;
    }
    println!();

    stream.close()?;
    Ok(())
}
