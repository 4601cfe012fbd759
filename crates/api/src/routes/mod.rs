pub mod brands;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /brands                 list (GET), create account + brand pair (POST)
/// /brands/{id}            get brand with its account (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/brands", brands::router())
}
