use super::*;
use std::env;

fn set_env_vars() {
    unsafe {
        env::set_var("JWT_SECRET", "supersecretjwtsecretforunittesting123");
        env::set_var("JWT_TTL_MINUTES", "30");
    }
}

#[test]
fn issued_token_round_trips() {
    set_env_vars();
    let user_id = Uuid::new_v4();

    let token = issue_token(user_id, UserRole::Trainer).unwrap();
    let claims = validate_token(&token).expect("Valid token should pass");

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.role, "trainer");
}

#[test]
fn expired_token_is_rejected() {
    set_env_vars();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        role: "member".to_string(),
        exp: 1,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret("supersecretjwtsecretforunittesting123".as_bytes()),
    )
    .unwrap();

    assert!(validate_token(&token).is_err());
}

#[test]
fn token_signed_with_wrong_secret_is_rejected() {
    set_env_vars();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        role: "member".to_string(),
        exp: 9999999999,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret("wrongsecret".as_bytes()),
    )
    .unwrap();

    assert!(validate_token(&token).is_err());
}
