use chrono::{DateTime, Utc};

use crate::error::RelayError;
use crate::providers::openrouter::ChatCompletionRequest;
use crate::relay::operation::Operation;

// 转发前记录请求概要；完整 payload 仅在 debug 级别输出（不含密钥）
pub fn log_forward(operation: Operation, endpoint: &str, request: &ChatCompletionRequest) {
    tracing::info!(
        operation = operation.name(),
        model = %request.model,
        max_tokens = request.max_tokens,
        temperature = request.temperature,
        "Forwarding completion request to {}",
        endpoint
    );
    if let Ok(payload) = serde_json::to_string(request) {
        tracing::debug!(operation = operation.name(), %payload, "Outbound payload");
    }
}

// 记录一次转发的结果及耗时
pub fn log_relay_outcome(
    operation: Operation,
    start_time: DateTime<Utc>,
    result: &Result<String, RelayError>,
) {
    let response_time_ms = (Utc::now() - start_time).num_milliseconds();

    match result {
        Ok(text) => tracing::info!(
            operation = operation.name(),
            response_time_ms,
            chars = text.chars().count(),
            "Upstream completion received"
        ),
        Err(RelayError::NetworkOrUnknown(detail)) => tracing::error!(
            operation = operation.name(),
            response_time_ms,
            "Failed to reach upstream: {}",
            detail
        ),
        Err(e) => tracing::warn!(
            operation = operation.name(),
            response_time_ms,
            "Upstream call failed: {}",
            e
        ),
    }
}
