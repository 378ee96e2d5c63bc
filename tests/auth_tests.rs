use chrono::Utc;
use fleetdash::{
    AppConfig,
    auth::{Claims, create_access_token, hash_password, status_rejection, verify_password},
    error::ApiError,
    models::{UserAccount, account_status},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

fn sample_user() -> UserAccount {
    UserAccount {
        id: 42,
        username: "fleet_admin".to_string(),
        email: "admin@example.com".to_string(),
        password: String::new(),
        status: account_status::ACTIVE.to_string(),
        created_at: Utc::now(),
    }
}

#[test]
fn test_access_token_round_trip() {
    let config = AppConfig::default();
    let user = sample_user();

    let token = create_access_token(&config, &user).unwrap();

    let decoded = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .unwrap();

    assert_eq!(decoded.claims.sub, "fleet_admin");
    assert_eq!(decoded.claims.user_id, 42);
    assert_eq!(decoded.claims.status, account_status::ACTIVE);
    assert!(decoded.claims.exp > decoded.claims.iat);
    // Lifetime matches the configured expiry, with a little slack.
    let lifetime = decoded.claims.exp - decoded.claims.iat;
    assert_eq!(lifetime as i64, config.token_expire_minutes * 60);
}

#[test]
fn test_expired_token_is_rejected() {
    let config = AppConfig::default();
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: "fleet_admin".to_string(),
        user_id: 42,
        status: account_status::ACTIVE.to_string(),
        exp: now - 3600,
        iat: now - 7200,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .unwrap();

    let result = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    );
    assert!(result.is_err(), "expired token must not validate");
}

#[test]
fn test_token_signed_with_wrong_secret_is_rejected() {
    let config = AppConfig::default();
    let user = sample_user();
    let token = create_access_token(&config, &user).unwrap();

    let result = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(b"a-different-secret"),
        &Validation::default(),
    );
    assert!(result.is_err(), "foreign signature must not validate");
}

#[test]
fn test_password_hash_and_verify() {
    let hash = hash_password("correct horse battery staple").unwrap();
    assert_ne!(hash, "correct horse battery staple");
    assert!(verify_password("correct horse battery staple", &hash));
    assert!(!verify_password("wrong password", &hash));
}

#[test]
fn test_malformed_hash_fails_verification() {
    assert!(!verify_password("anything", "not-a-bcrypt-hash"));
}

#[test]
fn test_status_rejections_are_forbidden() {
    for status in [
        account_status::INACTIVE,
        account_status::SUSPENDED,
        account_status::PENDING_APPROVAL,
        "archived",
    ] {
        let err = status_rejection(status);
        assert!(
            matches!(err, ApiError::Forbidden(_)),
            "{status} should map to a 403"
        );
    }
}

#[test]
fn test_pending_approval_message_names_the_state() {
    let err = status_rejection(account_status::PENDING_APPROVAL);
    assert!(err.to_string().contains("pending approval"));
}
