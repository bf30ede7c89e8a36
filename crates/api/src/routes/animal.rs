//! Route definitions for animal records.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::animal;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET    /animals        -> list
/// POST   /animal         -> create
/// GET    /animal/{id}    -> get_by_id
/// PUT    /animal/{id}    -> update
/// DELETE /animal/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/animals", get(animal::list))
        .route("/animal", post(animal::create))
        .route(
            "/animal/{id}",
            get(animal::get_by_id)
                .put(animal::update)
                .delete(animal::delete),
        )
}
