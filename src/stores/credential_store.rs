use argon2::{
    password_hash::SaltString, Algorithm, Argon2, Params, PasswordHash, PasswordHasher,
    PasswordVerifier, Version,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::internal::{CredentialError, InternalError};
use crate::types::db::refresh_token::{
    self, ActiveModel as RefreshTokenActiveModel, Entity as RefreshToken,
};
use crate::types::db::user::{self, ActiveModel as UserActiveModel, Entity as User};

/// Normalize an email for storage and lookup: trimmed, lowercased
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// CredentialStore manages user records and refresh tokens in the database
pub struct CredentialStore {
    db: DatabaseConnection,
    password_pepper: String,
}

impl CredentialStore {
    pub fn new(db: DatabaseConnection, password_pepper: String) -> Self {
        Self {
            db,
            password_pepper,
        }
    }

    /// Register a new user
    ///
    /// Fails with `DuplicateEmail` when the normalized email is already
    /// taken, and with `ValidationFailed` for blank or malformed fields.
    /// Returns the created user record.
    pub async fn register_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<user::Model, InternalError> {
        let username = username.trim();
        let email = normalize_email(email);

        if username.is_empty() {
            return Err(CredentialError::ValidationFailed("Username is required".to_string()).into());
        }
        if email.is_empty() || !email.contains('@') {
            return Err(
                CredentialError::ValidationFailed("A valid email is required".to_string()).into(),
            );
        }
        if password.len() < 6 {
            return Err(CredentialError::ValidationFailed(
                "Password must be at least 6 characters".to_string(),
            )
            .into());
        }

        // Check the normalized email before inserting; the unique constraint
        // backstops races
        let existing = User::find()
            .filter(user::Column::Email.eq(&email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("register_user", e))?;

        if existing.is_some() {
            return Err(CredentialError::DuplicateEmail(email).into());
        }

        let password_hash = self.hash_password(password)?;

        let new_user = UserActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            username: Set(username.to_string()),
            email: Set(email.clone()),
            password_hash: Set(password_hash),
            provider: Set("local".to_string()),
            created_at: Set(Utc::now().timestamp()),
        };

        let model = new_user.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                InternalError::from(CredentialError::DuplicateEmail(email.clone()))
            } else {
                InternalError::database("register_user", e)
            }
        })?;

        Ok(model)
    }

    /// Verify login credentials and return the user record
    ///
    /// The failure is discriminated: `UserNotFound` when no account has the
    /// email, `WrongPassword` when the hash does not verify.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<user::Model, InternalError> {
        let email = normalize_email(email);

        let found = User::find()
            .filter(user::Column::Email.eq(&email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("verify_credentials", e))?;

        let found = found.ok_or(CredentialError::UserNotFound(email))?;

        let parsed_hash = PasswordHash::new(&found.password_hash)
            .map_err(|e| CredentialError::PasswordHashingFailed(e.to_string()))?;

        self.argon2()?
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| CredentialError::WrongPassword)?;

        Ok(found)
    }

    /// Fetch a user record by ID
    pub async fn get_user(&self, user_id: &str) -> Result<user::Model, InternalError> {
        let found = User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_user", e))?;

        found.ok_or_else(|| {
            CredentialError::UserIdNotFound {
                user_id: user_id.to_string(),
            }
            .into()
        })
    }

    /// Store a refresh token hash for a user
    pub async fn store_refresh_token(
        &self,
        token_hash: String,
        user_id: String,
        expires_at: i64,
    ) -> Result<(), InternalError> {
        let record = RefreshTokenActiveModel {
            token_hash: Set(token_hash),
            user_id: Set(user_id),
            expires_at: Set(expires_at),
            created_at: Set(Utc::now().timestamp()),
        };

        record
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("store_refresh_token", e))?;

        Ok(())
    }

    /// Validate a refresh token hash and return the owning user ID
    pub async fn validate_refresh_token(&self, token_hash: &str) -> Result<String, InternalError> {
        let found = RefreshToken::find_by_id(token_hash)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("validate_refresh_token", e))?;

        let record = found.ok_or(CredentialError::InvalidRefreshToken)?;

        if record.expires_at < Utc::now().timestamp() {
            // Expired rows are lazily removed when presented
            let _ = RefreshToken::delete_by_id(&record.token_hash)
                .exec(&self.db)
                .await;
            return Err(CredentialError::ExpiredRefreshToken.into());
        }

        Ok(record.user_id)
    }

    /// Revoke a refresh token, scoped to its owning user
    pub async fn revoke_refresh_token(
        &self,
        token_hash: &str,
        user_id: &str,
    ) -> Result<(), InternalError> {
        let result = RefreshToken::delete_many()
            .filter(refresh_token::Column::TokenHash.eq(token_hash))
            .filter(refresh_token::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("revoke_refresh_token", e))?;

        if result.rows_affected == 0 {
            return Err(CredentialError::InvalidRefreshToken.into());
        }

        Ok(())
    }

    fn hash_password(&self, password: &str) -> Result<String, InternalError> {
        let salt = SaltString::generate(&mut rand_core::OsRng);
        let hash = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CredentialError::PasswordHashingFailed(e.to_string()))?
            .to_string();
        Ok(hash)
    }

    /// Argon2id instance with the pepper as secret parameter
    fn argon2(&self) -> Result<Argon2<'_>, InternalError> {
        Argon2::new_with_secret(
            self.password_pepper.as_bytes(),
            Algorithm::Argon2id,
            Version::V0x13,
            Params::default(),
        )
        .map_err(|e| CredentialError::PasswordHashingFailed(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_normalization() {
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
        assert_eq!(normalize_email("plain@host"), "plain@host");
    }
}
