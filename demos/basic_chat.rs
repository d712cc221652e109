//! One-shot chat completion example
//!
//! ```bash
//! export ANTHROPIC_API_KEY=sk-ant-api03-...
//! cargo run --example basic_chat
//! ```

use integrations_anthropic_chat::{
    create_client_from_env, AnthropicClient, ChatRequest, LogLevel, LoggingConfig, Message,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    LoggingConfig::new().with_level(LogLevel::Info).init()?;

    let client = create_client_from_env()?;

    let request = ChatRequest::new("claude-3-opus-20240229", 1024)
        .with_system("You are a concise assistant.")
        .with_message(Message::user("What is the capital of France?"));

    let response = client.messages().create_message(request).await?;

    println!("{}", response.text());
    if let Some(usage) = response.usage {
        println!("\nTokens: {} in / {} out", usage.input_tokens, usage.output_tokens);
    }

    Ok(())
}
