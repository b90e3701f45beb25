//! Contact form extractor
//!
//! Rejects the request before the handler runs when a field is missing or
//! blank, so an invalid post never reaches the submission store.

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Form,
};
use helping_hand_core::ContactForm;

/// A contact form whose fields are all present and non-blank
#[derive(Debug, Clone)]
pub struct ValidContactForm(pub ContactForm);

#[async_trait]
impl<S> FromRequest<S> for ValidContactForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(form) = Form::<ContactForm>::from_request(req, state).await?;
        form.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(Self(form))
    }
}
