// Common test utilities for integration tests

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use pyquest_backend::services::{ProgressService, TokenService};
use pyquest_backend::stores::{CredentialStore, ProgressStore};
use pyquest_backend::types::db::user;

/// Creates an in-memory test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub fn credential_store(db: &DatabaseConnection) -> Arc<CredentialStore> {
    Arc::new(CredentialStore::new(db.clone(), "test-pepper".to_string()))
}

pub fn progress_store(db: &DatabaseConnection) -> Arc<ProgressStore> {
    Arc::new(ProgressStore::new(db.clone()))
}

pub fn progress_service(db: &DatabaseConnection) -> Arc<ProgressService> {
    Arc::new(ProgressService::new(progress_store(db)))
}

pub fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(
        "test-jwt-secret".to_string(),
        "test-refresh-secret".to_string(),
    ))
}

/// Registers a fixture user and returns the created record
pub async fn register_test_user(store: &CredentialStore) -> user::Model {
    store
        .register_user("ada", "ada@example.com", "correct-horse")
        .await
        .expect("Failed to register test user")
}
