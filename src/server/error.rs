use super::types::ErrorResponse;
use crate::{
    message::{FieldError, INVALID_ID, InvalidMessageId},
    service::ServiceError,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{error, warn};

pub const VALIDATION_FAILED: &str = "Validation error";
pub const MALFORMED_REQUEST: &str = "validation error";
pub const REQUEST_ERROR: &str = "requisição apresenta erro";
pub const INTERNAL_ERROR: &str = "erro interno";
pub const STORAGE_FAILURE: &str = "falha ao acessar o armazenamento";
pub const INVALID_PAGE_SIZE: &str = "tamanho da página deve ser maior que zero";

/// Every way a request can fail once it reaches a handler.
#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<FieldError>),
    InvalidId(InvalidMessageId),
    InvalidPageSize,
    MalformedRequest(String),
    Service(ServiceError),
}

impl From<InvalidMessageId> for ApiError {
    fn from(err: InvalidMessageId) -> Self {
        Self::InvalidId(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl ApiError {
    fn status_and_body(self) -> (StatusCode, ErrorResponse) {
        match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(
                    VALIDATION_FAILED,
                    errors.iter().map(|e| e.message.to_string()).collect(),
                ),
            ),
            Self::InvalidId(err) => {
                warn!("Rejected malformed message id: {}", err.raw);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(MALFORMED_REQUEST, vec![INVALID_ID.to_string()]),
                )
            }
            Self::InvalidPageSize => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(MALFORMED_REQUEST, vec![INVALID_PAGE_SIZE.to_string()]),
            ),
            Self::MalformedRequest(reason) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(MALFORMED_REQUEST, vec![reason]),
            ),
            // Missing messages are reported as 400, never 404.
            Self::Service(ServiceError::NotFound(msg)) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(REQUEST_ERROR, vec![msg]),
            ),
            Self::Service(err @ ServiceError::LikeLimit) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(REQUEST_ERROR, vec![err.to_string()]),
            ),
            Self::Service(ServiceError::Storage(e)) => {
                error!("Storage failure while handling request: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(INTERNAL_ERROR, vec![STORAGE_FAILURE.to_string()]),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}
