use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid or malformed JWT")]
    Invalid,

    #[error("JWT has expired")]
    Expired,

    #[error("JWT generation failed: {0}")]
    Creation(String),
}
