//! JWT utilities for authentication
//!
//! Provides access-token encoding and two validation paths using the
//! `jsonwebtoken` crate: full validation for request authentication, and
//! signature-only validation (expiry ignored) for the refresh flow, which
//! must accept expired-but-otherwise-valid tokens. Expiry is then checked
//! separately against wall-clock time via [`Claims::is_expired`].

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// The only signing algorithm this service accepts. Pinning it in both
/// directions defends against algorithm-substitution attacks.
const ALGORITHM: Algorithm = Algorithm::HS512;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// User ID
    pub uid: i64,
    /// Username
    pub username: String,
    /// Unique token id, paired with a persisted refresh token
    pub jti: String,
    /// Role names assigned to the user
    #[serde(default)]
    pub roles: Vec<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Check if the token is expired against wall-clock time
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// A freshly signed access token with its `jti` claim
#[derive(Debug, Clone)]
pub struct SignedAccessToken {
    pub token: String,
    pub jti: String,
}

/// Access + refresh token pair handed to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl TokenPair {
    /// Bearer token pair
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

/// JWT service for encoding and decoding access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and access-token
    /// expiry in seconds
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
        }
    }

    /// Access-token lifetime in seconds
    #[must_use]
    pub fn access_token_expiry(&self) -> i64 {
        self.access_token_expiry
    }

    /// Sign an access token for a user, generating a fresh `jti`
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn sign(
        &self,
        user_id: i64,
        username: &str,
        email: &str,
        roles: Vec<String>,
    ) -> Result<SignedAccessToken, AppError> {
        let now = Utc::now();
        let jti = Uuid::new_v4().to_string();

        let claims = Claims {
            sub: email.to_string(),
            uid: user_id,
            username: username.to_string(),
            jti: jti.clone(),
            roles,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
        };

        let token = encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))?;

        Ok(SignedAccessToken { token, jti })
    }

    /// Decode and fully validate a token, expiry included
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::new(ALGORITHM);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }

    /// Decode a token, validating signature, structure, and algorithm while
    /// ignoring its expiry claim. Used by the refresh flow, which pairs this
    /// with an explicit [`Claims::is_expired`] check.
    ///
    /// # Errors
    /// Returns an error if the signature is invalid, the algorithm is not
    /// HS512, or the token is otherwise malformed
    pub fn decode_ignoring_expiry(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 86400)
    }

    fn expired_service() -> JwtService {
        // Negative lifetime: every signed token is already expired.
        JwtService::new("test-secret-key-that-is-long-enough", -3600)
    }

    #[test]
    fn test_sign_and_decode() {
        let service = create_test_service();
        let signed = service
            .sign(7, "amir", "amir@example.com", vec!["customer".into()])
            .unwrap();

        let claims = service.decode(&signed.token).unwrap();
        assert_eq!(claims.uid, 7);
        assert_eq!(claims.sub, "amir@example.com");
        assert_eq!(claims.username, "amir");
        assert_eq!(claims.jti, signed.jti);
        assert_eq!(claims.roles, vec!["customer".to_string()]);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_jti_is_unique_per_token() {
        let service = create_test_service();
        let a = service.sign(1, "u", "u@e.com", Vec::new()).unwrap();
        let b = service.sign(1, "u", "u@e.com", Vec::new()).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_decode_rejects_expired_token() {
        let service = expired_service();
        let signed = service.sign(1, "u", "u@e.com", Vec::new()).unwrap();

        let result = service.decode(&signed.token);
        assert!(matches!(result, Err(AppError::TokenExpired)));
    }

    #[test]
    fn test_decode_ignoring_expiry_accepts_expired_token() {
        let service = expired_service();
        let signed = service.sign(5, "u", "u@e.com", Vec::new()).unwrap();

        let claims = service.decode_ignoring_expiry(&signed.token).unwrap();
        assert_eq!(claims.uid, 5);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_decode_ignoring_expiry_still_rejects_bad_signature() {
        let service = create_test_service();
        let other = JwtService::new("a-completely-different-secret-key", 86400);

        let signed = other.sign(1, "u", "u@e.com", Vec::new()).unwrap();
        let result = service.decode_ignoring_expiry(&signed.token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_rejects_foreign_algorithm() {
        // Token signed with HS256 must be rejected even with a valid key.
        let service = create_test_service();
        let claims = Claims {
            sub: "u@e.com".into(),
            uid: 1,
            username: "u".into(),
            jti: "x".into(),
            roles: Vec::new(),
            iat: 0,
            exp: i64::MAX,
        };
        let hs256 = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret-key-that-is-long-enough"),
        )
        .unwrap();

        assert!(matches!(
            service.decode(&hs256),
            Err(AppError::InvalidToken)
        ));
        assert!(matches!(
            service.decode_ignoring_expiry(&hs256),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();
        let result = service.decode("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }
}
