use serde::Serialize;

use crate::config::AuthConfig;
use crate::jwt::Claims;
use crate::jwt::DecodeError;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenType;

/// Token issuance policy: one signing secret, one lifetime per token type.
///
/// Built once from an [`AuthConfig`] and shared read-only between requests.
pub struct TokenIssuer {
    jwt_handler: JwtHandler,
    config: AuthConfig,
}

/// Access and refresh token minted together at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenIssuer {
    /// Create a new issuer.
    ///
    /// # Arguments
    /// * `config` - Resolved secret and token lifetimes
    pub fn new(config: AuthConfig) -> Self {
        Self {
            jwt_handler: JwtHandler::new(config.secret.as_bytes()),
            config,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Mint a single token using the lifetime configured for its type.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue(&self, id: i64, token_type: TokenType) -> Result<String, JwtError> {
        let ttl = match token_type {
            TokenType::Access => self.config.access_expire,
            TokenType::Refresh => self.config.refresh_expire,
        };
        self.jwt_handler.mint(id, token_type, ttl)
    }

    /// Mint an access token and a refresh token for the same subject.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_pair(&self, id: i64) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access_token: self.issue(id, TokenType::Access)?,
            refresh_token: self.issue(id, TokenType::Refresh)?,
        })
    }

    /// Verify signature and expiry, returning the embedded claims.
    ///
    /// Token type is not checked here; callers decide which type they accept.
    ///
    /// # Errors
    /// * `DecodeError` - Token is malformed, forged or expired
    pub fn validate(&self, token: &str) -> Result<Claims, DecodeError> {
        self.jwt_handler.verify(token)
    }
}
