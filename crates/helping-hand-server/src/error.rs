//! HTTP error mapping

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use helping_hand_core::SiteError;
use thiserror::Error;

const SERVER_ERROR_PAGE: &str = "<!doctype html><html><head><meta charset=\"utf-8\"><title>Ошибка</title></head>\
<body><h1>Что-то пошло не так</h1><p>Попробуйте обновить страницу позже.</p></body></html>";

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Form(#[from] FormRejection),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Site(#[from] SiteError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Form(rejection) => {
                tracing::debug!("Rejected form: {}", rejection.body_text());
                rejection.into_response()
            }
            AppError::Validation(message) | AppError::Site(SiteError::Validation(message)) => {
                tracing::debug!("Rejected form: {}", message);
                (StatusCode::UNPROCESSABLE_ENTITY, message).into_response()
            }
            other => {
                tracing::error!("Request failed: {:#}", anyhow::Error::new(other));
                (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_PAGE)).into_response()
            }
        }
    }
}
