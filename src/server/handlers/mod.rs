mod ask;
mod humanize;

use axum::{Router, extract::rejection::JsonRejection, routing::post};
use std::sync::Arc;

use crate::error::RelayError;
use crate::relay::Operation;
use crate::server::AppState;
use crate::server::api_error::ApiError;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ask", post(ask::ask))
        .route("/humanize", post(humanize::humanize))
}

// 请求体无法解析时按缺少输入处理，保证始终返回 JSON 错误
fn input_or_reject(
    operation: Operation,
    field: Result<Option<String>, JsonRejection>,
) -> Result<String, ApiError> {
    match field {
        Ok(value) => Ok(value.unwrap_or_default()),
        Err(rejection) => {
            tracing::warn!(
                operation = operation.name(),
                "Rejected request body: {}",
                rejection.body_text()
            );
            Err(ApiError::from_relay(
                operation,
                &RelayError::MissingInput(operation.input_field()),
            ))
        }
    }
}
