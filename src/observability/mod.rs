//! Logging setup for applications embedding the client.
//!
//! The client emits `tracing` events on its own; nothing is printed unless a
//! subscriber is installed. [`LoggingConfig::init`] installs one.
//!
//! ```rust,no_run
//! use integrations_anthropic_chat::observability::{LoggingConfig, LogLevel, LogFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! LoggingConfig::new()
//!     .with_level(LogLevel::Debug)
//!     .with_format(LogFormat::Compact)
//!     .init()?;
//! # Ok(())
//! # }
//! ```

mod logging;

pub use logging::{LogFormat, LogLevel, LoggingConfig};
