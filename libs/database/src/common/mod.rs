//! Common utilities shared across database connectors

pub mod retry;

pub use retry::{RetryConfig, retry, retry_with_backoff};
