//! Database library providing the MongoDB connector and utilities
//!
//! This library provides connection management, startup retry, and health
//! checks for the document store backing the lost-and-found API.
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("lostfound");
//! let collection = db.collection::<Document>("items");
//! ```

pub mod common;
pub mod mongodb;

pub use common::{RetryConfig, retry, retry_with_backoff};
