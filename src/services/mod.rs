//! API services.

pub mod messages;
