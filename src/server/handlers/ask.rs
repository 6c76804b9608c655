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
pub struct AskPayload {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

pub async fn ask(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<AskPayload>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let question = input_or_reject(Operation::Ask, payload.map(|Json(p)| p.question))?;

    let answer = app_state
        .relay
        .answer_question(&question)
        .await
        .map_err(|e| ApiError::from_relay(Operation::Ask, &e))?;

    Ok(Json(AskResponse { answer }))
}
