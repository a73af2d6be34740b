mod common;

use common::*;

use pyquest_backend::errors::internal::{CredentialError, InternalError};

#[tokio::test]
async fn registering_the_same_email_twice_fails() {
    let db = setup_test_db().await;
    let store = credential_store(&db);

    store
        .register_user("ada", "Ada@Example.com", "correct-horse")
        .await
        .expect("First registration should succeed");

    // Different case and surrounding whitespace still collide
    let second = store
        .register_user("ada-again", "  ada@example.COM ", "other-password")
        .await;

    assert!(matches!(
        second,
        Err(InternalError::Credential(CredentialError::DuplicateEmail(_)))
    ));
}

#[tokio::test]
async fn registration_normalizes_the_stored_email() {
    let db = setup_test_db().await;
    let store = credential_store(&db);

    let user = store
        .register_user("ada", "  Ada@Example.COM ", "correct-horse")
        .await
        .unwrap();

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.provider, "local");
}

#[tokio::test]
async fn registration_rejects_blank_fields() {
    let db = setup_test_db().await;
    let store = credential_store(&db);

    let result = store.register_user("  ", "ada@example.com", "correct-horse").await;
    assert!(matches!(
        result,
        Err(InternalError::Credential(CredentialError::ValidationFailed(_)))
    ));

    let result = store.register_user("ada", "not-an-email", "correct-horse").await;
    assert!(matches!(
        result,
        Err(InternalError::Credential(CredentialError::ValidationFailed(_)))
    ));

    let result = store.register_user("ada", "ada@example.com", "short").await;
    assert!(matches!(
        result,
        Err(InternalError::Credential(CredentialError::ValidationFailed(_)))
    ));
}

#[tokio::test]
async fn login_failures_are_discriminated() {
    let db = setup_test_db().await;
    let store = credential_store(&db);
    register_test_user(&store).await;

    // Unknown email
    let result = store.verify_credentials("nobody@example.com", "whatever").await;
    assert!(matches!(
        result,
        Err(InternalError::Credential(CredentialError::UserNotFound(_)))
    ));

    // Known email, wrong password
    let result = store.verify_credentials("ada@example.com", "wrong-password").await;
    assert!(matches!(
        result,
        Err(InternalError::Credential(CredentialError::WrongPassword))
    ));
}

#[tokio::test]
async fn login_succeeds_with_unnormalized_email() {
    let db = setup_test_db().await;
    let store = credential_store(&db);
    let registered = register_test_user(&store).await;

    let user = store
        .verify_credentials(" ADA@example.com ", "correct-horse")
        .await
        .expect("Login should succeed");

    assert_eq!(user.id, registered.id);
}

#[tokio::test]
async fn refresh_token_roundtrip_and_revocation() {
    let db = setup_test_db().await;
    let store = credential_store(&db);
    let tokens = token_service();
    let user = register_test_user(&store).await;

    let refresh_token = tokens.generate_refresh_token();
    let token_hash = tokens.hash_refresh_token(&refresh_token);
    store
        .store_refresh_token(token_hash.clone(), user.id.clone(), tokens.refresh_expiration())
        .await
        .unwrap();

    let owner = store.validate_refresh_token(&token_hash).await.unwrap();
    assert_eq!(owner, user.id);

    store
        .revoke_refresh_token(&token_hash, &user.id)
        .await
        .expect("Revocation should succeed");

    let after_revoke = store.validate_refresh_token(&token_hash).await;
    assert!(matches!(
        after_revoke,
        Err(InternalError::Credential(CredentialError::InvalidRefreshToken))
    ));
}

#[tokio::test]
async fn expired_refresh_token_is_rejected() {
    let db = setup_test_db().await;
    let store = credential_store(&db);
    let tokens = token_service();
    let user = register_test_user(&store).await;

    let refresh_token = tokens.generate_refresh_token();
    let token_hash = tokens.hash_refresh_token(&refresh_token);
    // Already expired an hour ago
    store
        .store_refresh_token(
            token_hash.clone(),
            user.id.clone(),
            chrono::Utc::now().timestamp() - 3600,
        )
        .await
        .unwrap();

    let result = store.validate_refresh_token(&token_hash).await;
    assert!(matches!(
        result,
        Err(InternalError::Credential(CredentialError::ExpiredRefreshToken))
    ));
}

#[tokio::test]
async fn revoking_another_users_token_fails() {
    let db = setup_test_db().await;
    let store = credential_store(&db);
    let tokens = token_service();
    let user = register_test_user(&store).await;
    let other = store
        .register_user("grace", "grace@example.com", "different-pass")
        .await
        .unwrap();

    let refresh_token = tokens.generate_refresh_token();
    let token_hash = tokens.hash_refresh_token(&refresh_token);
    store
        .store_refresh_token(token_hash.clone(), user.id.clone(), tokens.refresh_expiration())
        .await
        .unwrap();

    let result = store.revoke_refresh_token(&token_hash, &other.id).await;
    assert!(matches!(
        result,
        Err(InternalError::Credential(CredentialError::InvalidRefreshToken))
    ));
}
