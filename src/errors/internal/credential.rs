use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    /// No user record exists for the given email
    #[error("No account found for email: {0}")]
    UserNotFound(String),

    /// The email matched a user but the password hash did not verify
    #[error("Wrong password")]
    WrongPassword,

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Registration rejected: {0}")]
    ValidationFailed(String),

    #[error("Password hashing failed: {0}")]
    PasswordHashingFailed(String),

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Expired refresh token")]
    ExpiredRefreshToken,

    #[error("User ID not found: {user_id}")]
    UserIdNotFound { user_id: String },
}
