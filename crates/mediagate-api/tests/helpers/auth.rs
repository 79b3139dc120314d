use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use mediagate_api::auth::JwtClaims;

/// Test master API key (must match setup_test_app).
pub const TEST_MASTER_API_KEY: &str = "test-master-api-key-at-least-32-characters-long";

/// Test HS256 secret (must match setup_test_app).
pub const TEST_JWT_SECRET: &str = "test-secret-key-min-32-characters-long-for-testing";

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn master_key_header() -> String {
    bearer(TEST_MASTER_API_KEY)
}

/// Sign a token for `sub` that expires `expires_in` from now (negative = already expired).
pub fn create_test_jwt(sub: &str, expires_in: Duration, secret: &str) -> String {
    let now = Utc::now();
    let claims = JwtClaims {
        sub: sub.to_string(),
        exp: (now + expires_in).timestamp(),
        iat: Some(now.timestamp()),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}
