use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims carried in the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    pub role: String,
    /// Linked employee record, if the account has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    pub exp: i64,
    pub iat: i64,
    /// Unique token identifier — keeps tokens distinct when several are
    /// issued for the same user within the same second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").expect("JWT_SECRET must be set")
}

pub fn session_expiry_minutes() -> i64 {
    std::env::var("JWT_SESSION_EXPIRY_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(60)
}

pub fn create_token(
    user_id: i64,
    email: &str,
    role: &str,
    employee_id: Option<i64>,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        role: role.to_string(),
        employee_id,
        iat: now.timestamp(),
        exp: (now + Duration::minutes(session_expiry_minutes())).timestamp(),
        jti: Some(uuid::Uuid::new_v4().to_string()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
}

pub fn validate_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_secret<T>(f: impl FnOnce() -> T) -> T {
        std::env::set_var("JWT_SECRET", "test-secret-do-not-use");
        f()
    }

    #[test]
    fn roundtrip_preserves_claims() {
        with_secret(|| {
            let token = create_token(42, "hr@example.com", "hradmin", Some(7)).unwrap();
            let claims = validate_token(&token).unwrap();
            assert_eq!(claims.sub, 42);
            assert_eq!(claims.email, "hr@example.com");
            assert_eq!(claims.role, "hradmin");
            assert_eq!(claims.employee_id, Some(7));
        });
    }

    #[test]
    fn tampered_token_is_rejected() {
        with_secret(|| {
            let token = create_token(1, "a@b.c", "employee", None).unwrap();
            let mut tampered = token.clone();
            tampered.push('x');
            assert!(validate_token(&tampered).is_err());
        });
    }

    #[test]
    fn tokens_are_unique_per_issue() {
        with_secret(|| {
            let a = create_token(1, "a@b.c", "employee", None).unwrap();
            let b = create_token(1, "a@b.c", "employee", None).unwrap();
            assert_ne!(a, b);
        });
    }
}
