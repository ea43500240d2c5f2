use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenType;
use super::errors::DecodeError;
use super::errors::JwtError;

/// JWT token handler for minting and verifying tokens.
///
/// Tokens are standard three-segment JWTs signed with HS256 (HMAC with SHA-256).
/// Signature comparison is delegated to `jsonwebtoken`, which verifies the MAC
/// in constant time.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Mint a signed token for `id` valid for `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn mint(&self, id: i64, token_type: TokenType, ttl: Duration) -> Result<String, JwtError> {
        self.encode(&Claims::issue(id, token_type, ttl))
    }

    /// Sign already-built claims.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token against the current time.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed or its claims are not ours
    /// * `SignatureInvalid` - Token was not signed with this handler's secret
    /// * `Expired` - Token lifetime has elapsed
    pub fn verify(&self, token: &str) -> Result<Claims, DecodeError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify a token against an explicit Unix timestamp.
    ///
    /// Signature is checked first; expiry is only evaluated on authentic claims.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, DecodeError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below so the [iat, exp) window has no leeway
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => DecodeError::SignatureInvalid,
                ErrorKind::ExpiredSignature => DecodeError::Expired,
                _ => DecodeError::Malformed(e.to_string()),
            })?;

        if claims.is_expired(now) {
            return Err(DecodeError::Expired);
        }

        Ok(claims)
    }
}
