use thiserror::Error;

pub mod assistant;
pub mod content;
pub mod credential;
pub mod database;
pub mod token;

pub use assistant::AssistantError;
pub use content::ContentError;
pub use credential::CredentialError;
pub use database::DatabaseError;
pub use token::TokenError;

/// Internal error type for store and service operations
///
/// Separates infrastructure errors (shared) from domain errors
/// (store-specific). Not exposed via API - endpoints must convert to one of
/// the `errors::api` response enums.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse { value_type: String, message: String },
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn parse(value_type: &str, message: impl Into<String>) -> InternalError {
        InternalError::Parse {
            value_type: value_type.to_string(),
            message: message.into(),
        }
    }
}
