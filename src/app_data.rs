use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppSettings;
use crate::errors::InternalError;
use crate::services::{GeminiClient, GeminiService, ProgressService, TokenService};
use crate::stores::{CredentialStore, ProgressStore};

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once at startup and shared across the API
/// groups, so every endpoint sees the same store instances.
pub struct AppData {
    pub db: DatabaseConnection,
    pub settings: AppSettings,
    pub credential_store: Arc<CredentialStore>,
    pub progress_store: Arc<ProgressStore>,
    pub token_service: Arc<TokenService>,
    pub progress_service: Arc<ProgressService>,
    pub gemini_service: Arc<GeminiService>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database must be connected and migrated before calling this.
    pub fn init(db: DatabaseConnection, settings: AppSettings) -> Result<Self, InternalError> {
        tracing::debug!("Initializing application data");

        let credential_store = Arc::new(CredentialStore::new(
            db.clone(),
            settings.password_pepper.clone(),
        ));
        let progress_store = Arc::new(ProgressStore::new(db.clone()));

        let token_service = Arc::new(TokenService::new(
            settings.jwt_secret.clone(),
            settings.refresh_token_secret.clone(),
        ));
        let progress_service = Arc::new(ProgressService::new(progress_store.clone()));

        let gemini_client = Arc::new(GeminiClient::new(settings.gemini.clone())?);
        let gemini_service = Arc::new(GeminiService::new(gemini_client));

        Ok(Self {
            db,
            settings,
            credential_store,
            progress_store,
            token_service,
            progress_service,
            gemini_service,
        })
    }
}
