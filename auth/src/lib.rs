//! Token authentication library
//!
//! Provides the stateless building blocks of the auth service:
//! - JWT access/refresh token minting and verification (HS256)
//! - Token issuance policy with per-type lifetimes
//! - Password hashing (Argon2id)
//!
//! # Examples
//!
//! ## Minting and verifying
//! ```
//! use auth::{JwtHandler, TokenType};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.mint(7, TokenType::Access, Duration::minutes(15)).unwrap();
//! let claims = handler.verify(&token).unwrap();
//! assert_eq!(claims.id, 7);
//! assert_eq!(claims.token_type, TokenType::Access);
//! ```
//!
//! ## Issuing a token pair
//! ```
//! use auth::{AuthConfig, TokenIssuer, TokenType};
//!
//! let issuer = TokenIssuer::new(AuthConfig::default());
//! let pair = issuer.issue_pair(7).unwrap();
//! let refresh = issuer.validate(&pair.refresh_token).unwrap();
//! assert_eq!(refresh.token_type, TokenType::Refresh);
//! ```
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```

pub mod config;
pub mod issuer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use config::AuthConfig;
pub use issuer::TokenIssuer;
pub use issuer::TokenPair;
pub use jwt::Claims;
pub use jwt::DecodeError;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenType;
pub use password::PasswordError;
pub use password::PasswordHasher;
