//! Donate page with the payment QR code

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::Html,
};
use helping_hand_core::qr;
use minijinja::context;

/// Query pairs in request order; a repeated `purpose` keeps its last value
type DonateQuery = Vec<(String, String)>;

fn purpose_param(query: &DonateQuery) -> Option<&str> {
    query
        .iter()
        .rev()
        .find(|(key, _)| key == "purpose")
        .map(|(_, value)| value.as_str())
        .filter(|p| !p.is_empty())
}

pub async fn donate(
    State(state): State<AppState>,
    Query(query): Query<DonateQuery>,
) -> Result<Html<String>, AppError> {
    let purpose = purpose_param(&query);
    let payload = qr::payment_payload(state.content.bank(), purpose);
    let qr_data_url = qr::data_url(&payload)?;

    state.templates.render(
        "donate.html",
        context! {
            config => state.content.config(),
            qr_data_url => qr_data_url,
            purpose => purpose,
            payload_lines => payload.split('\n').collect::<Vec<_>>(),
        },
    )
}
