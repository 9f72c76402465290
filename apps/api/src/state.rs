//! Shared application state.

use mongodb::{Client, Database};

/// State handed to every route builder.
///
/// Cloning is cheap: the MongoDB handles are Arc-backed and the config is a
/// plain value type.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables at startup
    pub config: crate::config::Config,
    /// MongoDB client, shares the underlying connection pool
    pub mongo_client: Client,
    /// Handle to the lost-and-found database
    pub db: Database,
}
