use std::fmt;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Purpose of a token.
///
/// Access and refresh tokens are signed with the same secret, so this field is
/// the only thing that keeps one from being accepted in place of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload embedded in every token minted by this crate.
///
/// Wire shape: `{"id": 7, "type": "access", "iat": 1700000000, "exp": 1700000900}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user identifier)
    pub id: i64,

    /// Token purpose
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims issued now and expiring after `ttl`.
    ///
    /// # Arguments
    /// * `id` - Subject identifier
    /// * `token_type` - Access or refresh
    /// * `ttl` - Lifetime of the token
    pub fn issue(id: i64, token_type: TokenType, ttl: Duration) -> Self {
        Self::issue_at(id, token_type, ttl, Utc::now().timestamp())
    }

    /// Create claims issued at an explicit Unix timestamp.
    pub fn issue_at(id: i64, token_type: TokenType, ttl: Duration, now: i64) -> Self {
        Self {
            id,
            token_type,
            iat: now,
            exp: now + ttl.num_seconds(),
        }
    }

    /// Check if token is expired.
    ///
    /// A token is valid on `[iat, exp)`, so one minted with a zero TTL is
    /// already expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }

    pub fn is_access(&self) -> bool {
        self.token_type == TokenType::Access
    }
}
