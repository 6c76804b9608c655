use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::RelayError;
use crate::relay::Operation;

/// What the browser receives on failure: `{"error": "..."}` plus a status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: &self.message })).into_response()
    }
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn from_relay(operation: Operation, err: &RelayError) -> Self {
        Self::new(status_for(operation, err), user_message(operation, err))
    }
}

pub fn status_for(operation: Operation, err: &RelayError) -> StatusCode {
    match err {
        RelayError::MissingInput(_) | RelayError::TokenLimitExceeded(_) => StatusCode::BAD_REQUEST,
        RelayError::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
        // humanize 将上游 API 层面的失败视为依赖故障
        RelayError::ModelUnavailable(_) | RelayError::UpstreamGeneric(_)
            if operation == Operation::Humanize =>
        {
            StatusCode::BAD_GATEWAY
        }
        RelayError::MissingCredential
        | RelayError::ModelUnavailable(_)
        | RelayError::UpstreamGeneric(_)
        | RelayError::InvalidUpstreamResponse
        | RelayError::NetworkOrUnknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn user_message(operation: Operation, err: &RelayError) -> String {
    match (operation, err) {
        (Operation::Ask, RelayError::MissingInput(_)) => "A pergunta é obrigatória".into(),
        (Operation::Humanize, RelayError::MissingInput(_)) => {
            "O texto para humanizar é obrigatório".into()
        }
        (_, RelayError::MissingCredential) => {
            "Erro de configuração do servidor: chave da API não configurada.".into()
        }
        (Operation::Ask, RelayError::AuthenticationFailed(_)) => {
            "Erro de autenticação. Por favor, verifique a chave da API.".into()
        }
        (Operation::Humanize, RelayError::AuthenticationFailed(_)) => {
            "Erro de autenticação ao humanizar. Verifique a chave.".into()
        }
        (Operation::Ask, RelayError::TokenLimitExceeded(_)) => {
            "Limite de tokens excedido. Por favor, tente uma mensagem mais curta.".into()
        }
        (Operation::Humanize, RelayError::TokenLimitExceeded(_)) => {
            "Erro ao humanizar: Limite de tokens excedido.".into()
        }
        (Operation::Ask, RelayError::ModelUnavailable(_)) => {
            "Modelo indisponível no momento. Por favor, tente novamente mais tarde.".into()
        }
        (Operation::Humanize, RelayError::ModelUnavailable(_)) => {
            "Erro ao humanizar: modelo indisponível no momento. Tente novamente mais tarde.".into()
        }
        (Operation::Ask, RelayError::UpstreamGeneric(message)) => {
            format!("Erro da API: {}", message)
        }
        (Operation::Humanize, RelayError::UpstreamGeneric(message)) => {
            format!("Erro da API ao humanizar: {}", message)
        }
        (Operation::Ask, RelayError::InvalidUpstreamResponse | RelayError::NetworkOrUnknown(_)) => {
            "Não foi possível obter uma resposta. Por favor, tente novamente mais tarde.".into()
        }
        (
            Operation::Humanize,
            RelayError::InvalidUpstreamResponse | RelayError::NetworkOrUnknown(_),
        ) => "Não foi possível humanizar o texto. Tente novamente.".into(),
    }
}
