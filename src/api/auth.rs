use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::BearerAuth;
use crate::errors::api::auth::AuthError;
use crate::services::{ProgressService, TokenService};
use crate::stores::CredentialStore;
use crate::types::dto::auth::{
    LoginRequest, LogoutRequest, LogoutResponse, RefreshRequest, RefreshResponse, RegisterRequest,
    TokenResponse, UserResponse, WhoAmIResponse,
};

/// Authentication API endpoints
pub struct AuthApi {
    credential_store: Arc<CredentialStore>,
    token_service: Arc<TokenService>,
    progress_service: Arc<ProgressService>,
}

impl AuthApi {
    pub fn new(
        credential_store: Arc<CredentialStore>,
        token_service: Arc<TokenService>,
        progress_service: Arc<ProgressService>,
    ) -> Self {
        Self {
            credential_store,
            token_service,
            progress_service,
        }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Create a new account
    ///
    /// Fails when the email (case-insensitive, trimmed) is already taken.
    #[oai(path = "/register", method = "post", tag = "AuthTags::Authentication")]
    async fn register(&self, body: Json<RegisterRequest>) -> Result<Json<UserResponse>, AuthError> {
        let user = self
            .credential_store
            .register_user(&body.username, &body.email, &body.password)
            .await?;

        tracing::info!(user_id = %user.id, "Account registered");

        Ok(Json(user.into()))
    }

    /// Login with email and password to receive authentication tokens
    ///
    /// The failure is discriminated: unknown email and wrong password return
    /// distinct error codes. A successful login also records the login for
    /// streak tracking.
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<TokenResponse>, AuthError> {
        let user = self
            .credential_store
            .verify_credentials(&body.email, &body.password)
            .await?;

        let access_token = self.token_service.generate_jwt(&user.id)?;

        let refresh_token = self.token_service.generate_refresh_token();
        let token_hash = self.token_service.hash_refresh_token(&refresh_token);
        let expires_at = self.token_service.refresh_expiration();
        self.credential_store
            .store_refresh_token(token_hash, user.id.clone(), expires_at)
            .await?;

        // Login counters and streak are part of the progress aggregate
        self.progress_service.record_login(&user.id).await?;

        Ok(Json(TokenResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_service.access_expires_in(),
            user: user.into(),
        }))
    }

    /// Verify JWT and return the authenticated user
    #[oai(path = "/whoami", method = "get", tag = "AuthTags::Authentication")]
    async fn whoami(&self, auth: BearerAuth) -> Result<Json<WhoAmIResponse>, AuthError> {
        let claims = self.token_service.validate_jwt(&auth.0.token)?;
        let user = self.credential_store.get_user(&claims.sub).await?;

        Ok(Json(WhoAmIResponse {
            user_id: user.id,
            username: user.username,
            email: user.email,
            expires_at: claims.exp,
        }))
    }

    /// Refresh access token using a refresh token
    #[oai(path = "/refresh", method = "post", tag = "AuthTags::Authentication")]
    async fn refresh(&self, body: Json<RefreshRequest>) -> Result<Json<RefreshResponse>, AuthError> {
        let token_hash = self.token_service.hash_refresh_token(&body.refresh_token);
        let user_id = self
            .credential_store
            .validate_refresh_token(&token_hash)
            .await?;

        let access_token = self.token_service.generate_jwt(&user_id)?;

        Ok(Json(RefreshResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_service.access_expires_in(),
        }))
    }

    /// Logout and revoke the refresh token
    #[oai(path = "/logout", method = "post", tag = "AuthTags::Authentication")]
    async fn logout(
        &self,
        auth: BearerAuth,
        body: Json<LogoutRequest>,
    ) -> Result<Json<LogoutResponse>, AuthError> {
        let claims = self.token_service.validate_jwt(&auth.0.token)?;

        let token_hash = self.token_service.hash_refresh_token(&body.refresh_token);
        self.credential_store
            .revoke_refresh_token(&token_hash, &claims.sub)
            .await?;

        Ok(Json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }))
    }
}
