//! Lost & Found client library
//!
//! Everything a frontend needs to talk to the Lost & Found API and to run
//! the browsing experience locally:
//!
//! - [`api`]: typed HTTP adapter over the REST endpoints
//! - [`filter`]: pure filtering, suggestions and match highlighting
//! - [`search`]: shared search term with persistence and debouncing
//! - [`submit`]: the report-an-item submission flow
//! - [`auth`]: campus email domain checks

pub mod api;
pub mod auth;
pub mod error;
pub mod filter;
pub mod search;
pub mod submit;

pub use api::LostFoundApi;
pub use auth::AllowedDomains;
pub use error::{ClientError, ClientResult};
pub use filter::{StatusFilter, filter_items, highlight_spans, suggestions};
pub use search::{Debouncer, FileSearchStore, SearchState, SearchStore};
pub use submit::{ImageAttachment, ReportForm, ReportKind, SubmissionFlow, SubmissionState};
