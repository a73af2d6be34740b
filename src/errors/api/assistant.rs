use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::errors::internal::{AssistantError, ContentError, InternalError, TokenError};

/// Standardized error response for assistant endpoints
#[derive(Object, Debug)]
pub struct AssistantErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Assistant endpoint error types
///
/// Model failures surface as a single generic upstream error; the concrete
/// cause is logged server-side only.
#[derive(ApiResponse, Debug)]
pub enum AssistantApiError {
    /// Invalid or malformed JWT
    #[oai(status = 401)]
    InvalidToken(Json<AssistantErrorResponse>),

    /// JWT has expired
    #[oai(status = 401)]
    ExpiredToken(Json<AssistantErrorResponse>),

    /// No quest exists with the requested ID
    #[oai(status = 404)]
    UnknownQuest(Json<AssistantErrorResponse>),

    /// The model API call failed
    #[oai(status = 502)]
    UpstreamFailure(Json<AssistantErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AssistantErrorResponse>),
}

impl AssistantApiError {
    pub fn invalid_token() -> Self {
        AssistantApiError::InvalidToken(Json(AssistantErrorResponse {
            error: "invalid_token".to_string(),
            message: "Invalid or malformed JWT".to_string(),
            status_code: 401,
        }))
    }

    pub fn expired_token() -> Self {
        AssistantApiError::ExpiredToken(Json(AssistantErrorResponse {
            error: "expired_token".to_string(),
            message: "JWT has expired".to_string(),
            status_code: 401,
        }))
    }

    pub fn unknown_quest(id: &str) -> Self {
        AssistantApiError::UnknownQuest(Json(AssistantErrorResponse {
            error: "unknown_quest".to_string(),
            message: format!("No quest with id '{}'", id),
            status_code: 404,
        }))
    }

    pub fn upstream_failure() -> Self {
        AssistantApiError::UpstreamFailure(Json(AssistantErrorResponse {
            error: "upstream_failure".to_string(),
            message: "The AI service is currently unavailable".to_string(),
            status_code: 502,
        }))
    }

    pub fn internal_error() -> Self {
        AssistantApiError::InternalError(Json(AssistantErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }
}

impl From<InternalError> for AssistantApiError {
    fn from(err: InternalError) -> Self {
        match err {
            InternalError::Token(TokenError::Expired) => AssistantApiError::expired_token(),
            InternalError::Token(TokenError::Invalid) => AssistantApiError::invalid_token(),
            InternalError::Content(ContentError::UnknownQuest(id)) => {
                AssistantApiError::unknown_quest(&id)
            }
            InternalError::Assistant(cause) => {
                tracing::error!("Model API call failed: {:?}", cause);
                AssistantApiError::upstream_failure()
            }
            other => {
                tracing::error!("Internal error in assistant endpoint: {:?}", other);
                AssistantApiError::internal_error()
            }
        }
    }
}

impl From<TokenError> for AssistantApiError {
    fn from(err: TokenError) -> Self {
        AssistantApiError::from(InternalError::Token(err))
    }
}

impl From<AssistantError> for AssistantApiError {
    fn from(err: AssistantError) -> Self {
        AssistantApiError::from(InternalError::Assistant(err))
    }
}
