//! API routes module
//!
//! Note: these routes are nested under /api by axum_helpers::create_router.

pub mod health;
pub mod items;
pub mod test;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state))
        .nest("/upload", upload::router(state))
        .merge(test::router())
        .merge(health::router(state.clone()))
}
