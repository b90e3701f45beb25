//! Story list and story detail pages

use crate::error::AppError;
use crate::handlers::pages::not_found_page;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use helping_hand_core::{links, Story};
use minijinja::context;
use serde::Serialize;

/// A story plus the links its page needs
#[derive(Debug, Serialize)]
pub struct StoryCard<'a> {
    #[serde(flatten)]
    pub story: &'a Story,
    pub href: String,
    pub donate_href: String,
}

impl<'a> StoryCard<'a> {
    pub fn new(story: &'a Story) -> Self {
        Self {
            story,
            href: links::story_href(&story.id),
            donate_href: links::donate_href(&story.title),
        }
    }
}

pub fn story_cards(stories: &[Story]) -> Vec<StoryCard<'_>> {
    stories.iter().map(StoryCard::new).collect()
}

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.templates.render(
        "stories.html",
        context! {
            config => state.content.config(),
            stories => story_cards(state.content.stories()),
        },
    )
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Some(story) = state.content.story(&id) else {
        tracing::debug!("Story not found: {}", id);
        return not_found_page(&state);
    };

    let page = state.templates.render(
        "story.html",
        context! {
            config => state.content.config(),
            story => StoryCard::new(story),
        },
    )?;
    Ok(page.into_response())
}
