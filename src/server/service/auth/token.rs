//! Bearer token issue and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, internal::InternalError},
        model::auth::Claims,
    },
};

/// Tokens stay valid for a week; there is no refresh.
pub const TOKEN_LIFETIME_DAYS: i64 = 7;

/// HMAC-SHA256 keys derived from `JWT_SECRET`.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a token for `user_id` issued at `now`.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(InternalError::TokenEncode)` - Signing failed
    pub fn issue(&self, user_id: i32, role: Role, now: DateTime<Utc>) -> Result<String, InternalError> {
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_LIFETIME_DAYS)).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Validates signature and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
