use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::errors::internal::{ContentError, InternalError, TokenError};

/// Standardized error response for progress endpoints
#[derive(Object, Debug)]
pub struct ProgressErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Progress endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ProgressError {
    /// Invalid or malformed JWT
    #[oai(status = 401)]
    InvalidToken(Json<ProgressErrorResponse>),

    /// JWT has expired
    #[oai(status = 401)]
    ExpiredToken(Json<ProgressErrorResponse>),

    /// No quest exists with the requested ID
    #[oai(status = 404)]
    UnknownQuest(Json<ProgressErrorResponse>),

    /// Quiz submission shape did not match the quest's quiz
    #[oai(status = 400)]
    InvalidSubmission(Json<ProgressErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ProgressErrorResponse>),
}

impl ProgressError {
    pub fn invalid_token() -> Self {
        ProgressError::InvalidToken(Json(ProgressErrorResponse {
            error: "invalid_token".to_string(),
            message: "Invalid or malformed JWT".to_string(),
            status_code: 401,
        }))
    }

    pub fn expired_token() -> Self {
        ProgressError::ExpiredToken(Json(ProgressErrorResponse {
            error: "expired_token".to_string(),
            message: "JWT has expired".to_string(),
            status_code: 401,
        }))
    }

    pub fn unknown_quest(id: &str) -> Self {
        ProgressError::UnknownQuest(Json(ProgressErrorResponse {
            error: "unknown_quest".to_string(),
            message: format!("No quest with id '{}'", id),
            status_code: 404,
        }))
    }

    pub fn invalid_submission(message: impl Into<String>) -> Self {
        ProgressError::InvalidSubmission(Json(ProgressErrorResponse {
            error: "invalid_submission".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    pub fn internal_error() -> Self {
        ProgressError::InternalError(Json(ProgressErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }
}

impl From<TokenError> for ProgressError {
    fn from(err: TokenError) -> Self {
        ProgressError::from(InternalError::Token(err))
    }
}

impl From<InternalError> for ProgressError {
    fn from(err: InternalError) -> Self {
        match err {
            InternalError::Token(TokenError::Expired) => ProgressError::expired_token(),
            InternalError::Token(TokenError::Invalid) => ProgressError::invalid_token(),
            InternalError::Content(ContentError::UnknownQuest(id)) => {
                ProgressError::unknown_quest(&id)
            }
            other => {
                tracing::error!("Internal error in progress endpoint: {:?}", other);
                ProgressError::internal_error()
            }
        }
    }
}
