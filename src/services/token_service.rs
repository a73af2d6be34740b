use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::errors::internal::TokenError;
use crate::services::crypto;
use crate::types::internal::auth::Claims;

/// Manages JWT access tokens and opaque refresh tokens
///
/// The access token is the session pointer: it carries the user id so
/// authenticated endpoints never need a user-table lookup.
pub struct TokenService {
    jwt_secret: String,
    refresh_token_secret: String,
    jwt_expiration_minutes: i64,
    refresh_expiration_days: i64,
}

impl TokenService {
    pub fn new(jwt_secret: String, refresh_token_secret: String) -> Self {
        Self {
            jwt_secret,
            refresh_token_secret,
            jwt_expiration_minutes: 15,
            refresh_expiration_days: 7,
        }
    }

    /// Generate a JWT for the given user ID
    pub fn generate_jwt(&self, user_id: &str) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + self.jwt_expiration_minutes * 60,
            iat: now,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| TokenError::Creation(e.to_string()))
    }

    /// Validate a JWT and return its claims
    pub fn validate_jwt(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })
    }

    /// Generate a new opaque refresh token
    pub fn generate_refresh_token(&self) -> String {
        crypto::generate_opaque_token()
    }

    /// Hash a refresh token for storage and lookup
    pub fn hash_refresh_token(&self, token: &str) -> String {
        crypto::hmac_sha256_token(&self.refresh_token_secret, token)
    }

    /// Unix timestamp at which a refresh token issued now expires
    pub fn refresh_expiration(&self) -> i64 {
        Utc::now().timestamp() + self.refresh_expiration_days * 24 * 60 * 60
    }

    /// Access token lifetime in seconds, for token responses
    pub fn access_expires_in(&self) -> i64 {
        self.jwt_expiration_minutes * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("jwt-secret".to_string(), "refresh-secret".to_string())
    }

    #[test]
    fn jwt_roundtrip() {
        let service = service();
        let token = service.generate_jwt("user-123").unwrap();
        let claims = service.validate_jwt(&token).unwrap();

        assert_eq!(claims.sub, "user-123");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn tampered_jwt_is_invalid() {
        let service = service();
        let token = service.generate_jwt("user-123").unwrap();
        let mut tampered = token.clone();
        tampered.push('x');

        assert!(matches!(
            service.validate_jwt(&tampered),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn jwt_from_other_secret_is_rejected() {
        let token = service().generate_jwt("user-123").unwrap();
        let other = TokenService::new("different".to_string(), "refresh-secret".to_string());

        assert!(other.validate_jwt(&token).is_err());
    }

    #[test]
    fn refresh_token_hash_is_stable() {
        let service = service();
        let token = service.generate_refresh_token();

        assert_eq!(
            service.hash_refresh_token(&token),
            service.hash_refresh_token(&token)
        );
    }
}
