//! Home, static informational pages and the not-found page

use crate::error::AppError;
use crate::handlers::stories::story_cards;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::context;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.templates.render(
        "index.html",
        context! {
            config => state.content.config(),
            stories => story_cards(state.content.stories()),
        },
    )
}

pub async fn about(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    static_page(&state, "about.html")
}

pub async fn documents(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    static_page(&state, "documents.html")
}

pub async fn policy(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    static_page(&state, "policy.html")
}

pub async fn offer(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    static_page(&state, "offer.html")
}

/// Fallback for unmatched routes
pub async fn not_found(State(state): State<AppState>) -> Result<Response, AppError> {
    not_found_page(&state)
}

pub fn not_found_page(state: &AppState) -> Result<Response, AppError> {
    let page = state
        .templates
        .render("404.html", context! { config => state.content.config() })?;
    Ok((StatusCode::NOT_FOUND, page).into_response())
}

fn static_page(state: &AppState, name: &str) -> Result<Html<String>, AppError> {
    state
        .templates
        .render(name, context! { config => state.content.config() })
}
