use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;

const HOME_PAGE: &str = include_str!("../../templates/home.html");

/// GET / -- static landing page.
async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}
