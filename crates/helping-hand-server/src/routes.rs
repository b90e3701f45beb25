//! HTTP router

use crate::handlers::{self, contacts, donate, pages, stories};
use crate::AppState;
use axum::{routing::get, Router};
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/about", get(pages::about))
        .route("/stories", get(stories::list))
        .route("/stories/:id", get(stories::show))
        .route("/donate", get(donate::donate))
        .route("/contacts", get(contacts::form).post(contacts::submit))
        .route("/documents", get(pages::documents))
        .route("/policy", get(pages::policy))
        .route("/offer", get(pages::offer))
        .route("/health", get(handlers::health))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
