pub mod animal;
pub mod health;
pub mod home;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /                    landing page
/// /health              liveness probe
///
/// /animals             list
/// /animal              create
/// /animal/{id}         get, update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(home::router())
        .merge(health::router())
        .merge(animal::router())
}
