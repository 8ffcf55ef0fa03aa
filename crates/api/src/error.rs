//! API error types with HTTP response mapping.
//!
//! Every route answers failures with a fixed Portuguese message chosen by
//! the route, never with the underlying cause. Causes are logged instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;

/// Message for any lookup of an ID that is not stored.
pub const NOT_FOUND_MESSAGE: &str = "Instituição não encontrada";

/// The route an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
    Totals,
    Exists,
}

impl Operation {
    /// Message returned when this operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Erro ao buscar instituições",
            Operation::Create => "Erro ao salvar instituição",
            Operation::Update => "Erro ao atualizar instituição",
            Operation::Delete => "Erro ao excluir instituição",
            Operation::Totals => "Erro ao buscar dados agregados",
            Operation::Exists => "Erro ao verificar instituição.",
        }
    }

    /// Status for a store failure: reads answer 500, writes answer 400.
    fn store_failure_status(self) -> StatusCode {
        match self {
            Operation::List | Operation::Totals | Operation::Exists => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Operation::Create | Operation::Update | Operation::Delete => StatusCode::BAD_REQUEST,
        }
    }

    /// Wraps a domain error raised while running this operation.
    pub fn error(self, source: DomainError) -> ApiError {
        ApiError::Domain {
            operation: self,
            source,
        }
    }

    /// Rejects a malformed request for this operation.
    pub fn bad_request(self) -> ApiError {
        ApiError::BadRequest(self.failure_message().to_string())
    }
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Domain logic error raised by the given operation.
    Domain {
        operation: Operation,
        source: DomainError,
    },
}

impl ApiError {
    /// Status code and body message for this error.
    pub fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            ApiError::Domain { operation, source } => match source {
                DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
                DomainError::Validation(_) => {
                    (StatusCode::BAD_REQUEST, operation.failure_message())
                }
                DomainError::Store(_) => (
                    operation.store_failure_status(),
                    operation.failure_message(),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if let ApiError::Domain { operation, source } = &self {
            if matches!(source, DomainError::Store(_)) {
                tracing::error!(?operation, error = %source, "store failure");
            } else {
                tracing::debug!(?operation, error = %source, "request rejected");
            }
        }

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
