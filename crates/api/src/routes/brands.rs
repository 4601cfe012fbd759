//! Route definitions for the `/brands` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::brands;
use crate::state::AppState;

/// Routes mounted at `/brands`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(brands::list).post(brands::create))
        .route("/{id}", get(brands::get_by_id))
}
