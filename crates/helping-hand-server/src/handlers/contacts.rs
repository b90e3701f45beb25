//! Contact form

use crate::error::AppError;
use crate::extractors::ValidContactForm;
use crate::AppState;
use axum::{extract::State, response::Html};
use minijinja::context;

pub async fn form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, false)
}

pub async fn submit(
    State(state): State<AppState>,
    ValidContactForm(form): ValidContactForm,
) -> Result<Html<String>, AppError> {
    state.submissions.save(&form).await?;
    render(&state, true)
}

fn render(state: &AppState, submitted: bool) -> Result<Html<String>, AppError> {
    state.templates.render(
        "contacts.html",
        context! {
            config => state.content.config(),
            submitted => submitted,
        },
    )
}
