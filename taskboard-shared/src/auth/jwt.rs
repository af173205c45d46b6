/// Session token generation and validation
///
/// Tokens are signed JWTs using HS256 (HMAC-SHA256) and carry the user's
/// identity and role. There is no refresh mechanism: tokens expire one hour
/// after issuance and an expired token requires a fresh login.
///
/// # Security
///
/// - **Algorithm**: HS256 (HMAC with SHA-256)
/// - **Expiration**: Fixed 1 hour, validated with zero leeway
/// - **Validation**: Signature, expiration, and issuer checks
/// - **Secret Management**: Secrets should be at least 32 bytes (256 bits)
///
/// # Example
///
/// ```
/// use taskboard_shared::auth::jwt::{create_token, validate_token, Claims};
/// use taskboard_shared::models::user::Role;
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let user_id = Uuid::new_v4();
///
/// let claims = Claims::new(user_id, Role::Admin);
/// let token = create_token(&claims, "your-secret-key-at-least-32-bytes")?;
///
/// let validated = validate_token(&token, "your-secret-key-at-least-32-bytes")?;
/// assert_eq!(validated.sub, user_id);
/// assert_eq!(validated.role, Role::Admin);
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::Role;

/// How long an issued token remains valid, in seconds (1 hour)
pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// Issuer written into and required from every token
const ISSUER: &str = "taskboard";

/// Error type for token operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Failed to validate token
    #[error("Failed to validate token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,
}

/// Claims carried by a session token
///
/// # Standard Claims
///
/// - `sub`: Subject (user ID)
/// - `iss`: Issuer (always "taskboard")
/// - `iat`: Issued at timestamp
/// - `exp`: Expiration timestamp
///
/// # Custom Claims
///
/// - `role`: The user's role, checked by the admin-only middleware
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - User ID
    pub sub: Uuid,

    /// Issuer - Always "taskboard"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Role of the authenticated user (custom claim)
    pub role: Role,
}

impl Claims {
    /// Creates new claims expiring [`TOKEN_TTL_SECONDS`] from now
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self::with_expiration(user_id, role, Duration::seconds(TOKEN_TTL_SECONDS))
    }

    /// Creates claims with a custom expiration
    ///
    /// Used by tests to exercise the expiry boundary; production tokens
    /// always go through [`Claims::new`].
    pub fn with_expiration(user_id: Uuid, role: Role, expires_in: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
            role,
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Creates a signed token from claims
///
/// # Errors
///
/// Returns `JwtError::CreateError` if token encoding fails
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Validates a token and extracts its claims
///
/// Verifies:
/// - Signature is valid
/// - Token hasn't expired (no leeway: the 1 hour boundary is exact)
/// - Issuer is "taskboard"
///
/// # Errors
///
/// Returns `JwtError::Expired` for an expired token and
/// `JwtError::ValidationError` for any other failure (bad signature,
/// malformed payload, wrong issuer).
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        _ => JwtError::ValidationError(format!("Token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    #[test]
    fn test_claims_creation() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, Role::User);

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.iss, "taskboard");
        assert_eq!(claims.role, Role::User);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECONDS);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_create_and_validate_token() {
        let user_id = Uuid::new_v4();

        let claims = Claims::new(user_id, Role::Admin);
        let token = create_token(&claims, SECRET).expect("Should create token");

        let validated = validate_token(&token, SECRET).expect("Should validate token");
        assert_eq!(validated.sub, user_id);
        assert_eq!(validated.role, Role::Admin);
        assert_eq!(validated.iss, "taskboard");
    }

    #[test]
    fn test_role_survives_roundtrip() {
        for role in [Role::User, Role::Admin] {
            let claims = Claims::new(Uuid::new_v4(), role);
            let token = create_token(&claims, SECRET).unwrap();
            let validated = validate_token(&token, SECRET).unwrap();
            assert_eq!(validated.role, role);
        }
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let claims = Claims::new(Uuid::new_v4(), Role::User);
        let token = create_token(&claims, "secret1-that-is-long-enough-here").unwrap();

        let result = validate_token(&token, "wrong-secret-that-is-long-enough");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_garbled_token() {
        let result = validate_token("not-a-token", SECRET);
        assert!(matches!(result, Err(JwtError::ValidationError(_))));
    }

    #[test]
    fn test_validate_expired_token() {
        // Expired one minute past the 1 hour window
        let claims = Claims::with_expiration(Uuid::new_v4(), Role::User, Duration::minutes(-1));

        assert!(claims.is_expired());

        let token = create_token(&claims, SECRET).unwrap();
        let result = validate_token(&token, SECRET);

        assert!(matches!(result, Err(JwtError::Expired)));
    }

    #[test]
    fn test_token_accepted_just_before_expiry() {
        // A token issued 59 minutes ago still has one minute left
        let claims = Claims::with_expiration(Uuid::new_v4(), Role::User, Duration::minutes(1));
        let token = create_token(&claims, SECRET).unwrap();

        assert!(validate_token(&token, SECRET).is_ok());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let claims = Claims::new(Uuid::new_v4(), Role::User);
        let token = create_token(&claims, SECRET).unwrap();

        // Flip a character in the payload segment
        let mut tampered = token.into_bytes();
        let mid = tampered.len() / 2;
        tampered[mid] = if tampered[mid] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        assert!(validate_token(&tampered, SECRET).is_err());
    }
}
