//! Lost & Found API
//!
//! Library portion of the binary so integration tests can build the same
//! router the server runs.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;
