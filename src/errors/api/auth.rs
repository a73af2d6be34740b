use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::errors::internal::{CredentialError, InternalError, TokenError};

/// Standardized error response for authentication endpoints
#[derive(Object, Debug)]
pub struct AuthErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Authentication error types
///
/// Login failures stay discriminated: a missing account and a wrong password
/// produce distinct error codes, as the client renders them differently.
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// No account exists for the given email
    #[oai(status = 401)]
    UserNotFound(Json<AuthErrorResponse>),

    /// Password did not match
    #[oai(status = 401)]
    WrongPassword(Json<AuthErrorResponse>),

    /// Email already registered
    #[oai(status = 400)]
    DuplicateEmail(Json<AuthErrorResponse>),

    /// Registration payload rejected
    #[oai(status = 400)]
    ValidationFailed(Json<AuthErrorResponse>),

    /// Invalid or malformed JWT
    #[oai(status = 401)]
    InvalidToken(Json<AuthErrorResponse>),

    /// JWT has expired
    #[oai(status = 401)]
    ExpiredToken(Json<AuthErrorResponse>),

    /// Invalid refresh token
    #[oai(status = 401)]
    InvalidRefreshToken(Json<AuthErrorResponse>),

    /// Refresh token has expired
    #[oai(status = 401)]
    ExpiredRefreshToken(Json<AuthErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AuthErrorResponse>),
}

impl AuthError {
    pub fn user_not_found() -> Self {
        AuthError::UserNotFound(Json(AuthErrorResponse {
            error: "user_not_found".to_string(),
            message: "No account found for this email".to_string(),
            status_code: 401,
        }))
    }

    pub fn wrong_password() -> Self {
        AuthError::WrongPassword(Json(AuthErrorResponse {
            error: "wrong_password".to_string(),
            message: "Incorrect password".to_string(),
            status_code: 401,
        }))
    }

    pub fn duplicate_email() -> Self {
        AuthError::DuplicateEmail(Json(AuthErrorResponse {
            error: "duplicate_email".to_string(),
            message: "An account with this email already exists".to_string(),
            status_code: 400,
        }))
    }

    pub fn validation_failed(message: String) -> Self {
        AuthError::ValidationFailed(Json(AuthErrorResponse {
            error: "validation_failed".to_string(),
            message,
            status_code: 400,
        }))
    }

    pub fn invalid_token() -> Self {
        AuthError::InvalidToken(Json(AuthErrorResponse {
            error: "invalid_token".to_string(),
            message: "Invalid or malformed JWT".to_string(),
            status_code: 401,
        }))
    }

    pub fn expired_token() -> Self {
        AuthError::ExpiredToken(Json(AuthErrorResponse {
            error: "expired_token".to_string(),
            message: "JWT has expired".to_string(),
            status_code: 401,
        }))
    }

    pub fn invalid_refresh_token() -> Self {
        AuthError::InvalidRefreshToken(Json(AuthErrorResponse {
            error: "invalid_refresh_token".to_string(),
            message: "Refresh token is not recognized".to_string(),
            status_code: 401,
        }))
    }

    pub fn expired_refresh_token() -> Self {
        AuthError::ExpiredRefreshToken(Json(AuthErrorResponse {
            error: "expired_refresh_token".to_string(),
            message: "Refresh token has expired".to_string(),
            status_code: 401,
        }))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        AuthError::InternalError(Json(AuthErrorResponse {
            error: "internal_error".to_string(),
            message: message.into(),
            status_code: 500,
        }))
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        AuthError::from(InternalError::Token(err))
    }
}

impl From<InternalError> for AuthError {
    fn from(err: InternalError) -> Self {
        match err {
            InternalError::Credential(CredentialError::UserNotFound(_)) => {
                AuthError::user_not_found()
            }
            InternalError::Credential(CredentialError::WrongPassword) => {
                AuthError::wrong_password()
            }
            InternalError::Credential(CredentialError::DuplicateEmail(_)) => {
                AuthError::duplicate_email()
            }
            InternalError::Credential(CredentialError::ValidationFailed(message)) => {
                AuthError::validation_failed(message)
            }
            InternalError::Credential(CredentialError::InvalidRefreshToken) => {
                AuthError::invalid_refresh_token()
            }
            InternalError::Credential(CredentialError::ExpiredRefreshToken) => {
                AuthError::expired_refresh_token()
            }
            InternalError::Token(TokenError::Expired) => AuthError::expired_token(),
            InternalError::Token(TokenError::Invalid) => AuthError::invalid_token(),
            other => {
                tracing::error!("Internal error in auth endpoint: {:?}", other);
                AuthError::internal_error("An internal error occurred")
            }
        }
    }
}
