use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::input_or_reject;
use crate::relay::Operation;
use crate::server::AppState;
use crate::server::api_error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct HumanizePayload {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizeResponse {
    pub humanized_text: String,
}

pub async fn humanize(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<HumanizePayload>, JsonRejection>,
) -> Result<Json<HumanizeResponse>, ApiError> {
    let text = input_or_reject(Operation::Humanize, payload.map(|Json(p)| p.text))?;

    let humanized_text = app_state
        .relay
        .humanize_text(&text)
        .await
        .map_err(|e| ApiError::from_relay(Operation::Humanize, &e))?;

    Ok(Json(HumanizeResponse { humanized_text }))
}
