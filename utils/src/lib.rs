//! Shared utilities: structured logging set-up and tracing spans.

pub mod logging;
pub mod spans;

pub use logging::{init_logging, LogFormat};
