// Identity service tests against the in-memory repository
use std::sync::Arc;

use auth_identity::{
    AccountPatch, Argon2Encoder, IdentityConfig, IdentityService, InMemoryAccountRepository,
    JwtCodec, NewAccount,
};
use error_common::ServiceError;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn service() -> (IdentityService, Arc<InMemoryAccountRepository>) {
    let repo = Arc::new(InMemoryAccountRepository::new());
    let config = IdentityConfig {
        jwt_secret: "test-secret".to_string(),
        ..IdentityConfig::default()
    };
    let service = IdentityService::new(
        repo.clone(),
        Arc::new(Argon2Encoder::new()),
        Arc::new(JwtCodec::new(&config)),
    );
    (service, repo)
}

fn new_account(email: &str) -> NewAccount {
    NewAccount {
        email: email.to_string(),
        password: "s3cret-pass".to_string(),
        name: "Ana Souza".to_string(),
    }
}

// =============================================================================
// REGISTRATION
// =============================================================================

#[tokio::test]
async fn register_stores_digest_not_plaintext() {
    let (service, _) = service();
    let account = service.register(new_account("ana@example.com")).await.unwrap();

    assert_ne!(account.password_hash, "s3cret-pass");
    assert!(account.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let (service, _) = service();
    service.register(new_account("ana@example.com")).await.unwrap();

    let err = service
        .register(new_account("ana@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn digest_is_excluded_from_serialized_account() {
    let (service, _) = service();
    let account = service.register(new_account("ana@example.com")).await.unwrap();

    let json = serde_json::to_value(&account).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "ana@example.com");
}

// =============================================================================
// AUTHENTICATION
// =============================================================================

#[tokio::test]
async fn authenticate_returns_bearer_prefixed_token() {
    let (service, _) = service();
    service.register(new_account("ana@example.com")).await.unwrap();

    let token = service
        .authenticate("ana@example.com", "s3cret-pass")
        .await
        .unwrap();
    assert!(token.starts_with("Bearer "));
}

#[tokio::test]
async fn all_credential_failures_share_one_message() {
    let (service, _) = service();
    service.register(new_account("ana@example.com")).await.unwrap();

    let wrong_password = service
        .authenticate("ana@example.com", "nope")
        .await
        .unwrap_err();
    let unknown_email = service
        .authenticate("ghost@example.com", "s3cret-pass")
        .await
        .unwrap_err();

    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert!(matches!(wrong_password, ServiceError::Unauthorized(_)));
}

// =============================================================================
// IDENTITY RESOLUTION
// =============================================================================

#[tokio::test]
async fn resolve_identity_roundtrips_the_subject() {
    let (service, _) = service();
    service.register(new_account("ana@example.com")).await.unwrap();

    let bearer = service
        .authenticate("ana@example.com", "s3cret-pass")
        .await
        .unwrap();
    assert_eq!(service.resolve_identity(&bearer).unwrap(), "ana@example.com");
}

#[tokio::test]
async fn token_without_scheme_prefix_is_unauthorized() {
    let (service, _) = service();
    service.register(new_account("ana@example.com")).await.unwrap();

    let bearer = service
        .authenticate("ana@example.com", "s3cret-pass")
        .await
        .unwrap();
    let raw = bearer.trim_start_matches("Bearer ");

    assert!(matches!(
        service.resolve_identity(raw),
        Err(ServiceError::Unauthorized(_))
    ));
}

// =============================================================================
// PROFILE UPDATES
// =============================================================================

#[tokio::test]
async fn patch_without_password_keeps_the_digest() {
    let (service, _) = service();
    let before = service.register(new_account("ana@example.com")).await.unwrap();
    let bearer = service
        .authenticate("ana@example.com", "s3cret-pass")
        .await
        .unwrap();

    let after = service
        .update_profile(
            &bearer,
            AccountPatch {
                name: Some("Ana S. Lima".to_string()),
                ..AccountPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(after.name, "Ana S. Lima");
    assert_eq!(after.email, before.email);
    assert_eq!(after.password_hash, before.password_hash);
}

#[tokio::test]
async fn patch_with_password_rotates_the_digest() {
    let (service, _) = service();
    let before = service.register(new_account("ana@example.com")).await.unwrap();
    let bearer = service
        .authenticate("ana@example.com", "s3cret-pass")
        .await
        .unwrap();

    let after = service
        .update_profile(
            &bearer,
            AccountPatch {
                password: Some("new-pass".to_string()),
                ..AccountPatch::default()
            },
        )
        .await
        .unwrap();

    assert_ne!(after.password_hash, before.password_hash);

    // Old plaintext no longer authenticates; the new one does
    assert!(service
        .authenticate("ana@example.com", "s3cret-pass")
        .await
        .is_err());
    assert!(service
        .authenticate("ana@example.com", "new-pass")
        .await
        .is_ok());
}

#[tokio::test]
async fn update_profile_for_deleted_subject_is_not_found() {
    let (service, _) = service();
    service.register(new_account("ana@example.com")).await.unwrap();
    let bearer = service
        .authenticate("ana@example.com", "s3cret-pass")
        .await
        .unwrap();

    service.delete_by_email("ana@example.com").await.unwrap();

    let err = service
        .update_profile(&bearer, AccountPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

// =============================================================================
// LOOKUP AND DELETION
// =============================================================================

#[tokio::test]
async fn find_by_email_not_found() {
    let (service, _) = service();
    let err = service.find_by_email("ghost@example.com").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn deleting_a_nonexistent_email_is_a_noop() {
    let (service, _) = service();
    assert!(service.delete_by_email("ghost@example.com").await.is_ok());
}
