use auth::DecodeError;
use auth::JwtError;
use thiserror::Error;

use crate::user::errors::CredentialsError;
use crate::user::errors::RegistrationError;

/// Coarse failure class, decides the status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Missing or malformed request field
    Input,
    /// Bad credentials or an unusable token
    Auth,
    /// Duplicate registration
    Conflict,
    /// Store, hashing or signing failure
    Internal,
}

/// Failure of a login, refresh or register operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFlowError {
    #[error("{0}")]
    MissingInput(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{0}")]
    InvalidToken(#[from] DecodeError),

    #[error("Invalid Token")]
    WrongTokenType,

    #[error("User with email {0} already exists")]
    Duplicate(String),

    /// The detail is for logs only and never rendered to clients.
    #[error("Internal server error")]
    Internal(String),
}

impl AuthFlowError {
    pub fn class(&self) -> ErrorClass {
        match self {
            AuthFlowError::MissingInput(_) | AuthFlowError::InvalidInput(_) => ErrorClass::Input,
            AuthFlowError::InvalidCredentials
            | AuthFlowError::InvalidToken(_)
            | AuthFlowError::WrongTokenType => ErrorClass::Auth,
            AuthFlowError::Duplicate(_) => ErrorClass::Conflict,
            AuthFlowError::Internal(_) => ErrorClass::Internal,
        }
    }

    /// Duplicate registrations share 400 with the other client errors.
    pub fn status_code(&self) -> u16 {
        match self.class() {
            ErrorClass::Input | ErrorClass::Auth | ErrorClass::Conflict => 400,
            ErrorClass::Internal => 500,
        }
    }
}

impl From<CredentialsError> for AuthFlowError {
    fn from(err: CredentialsError) -> Self {
        match err {
            // Same message for both so callers cannot probe for accounts
            CredentialsError::NotFound | CredentialsError::BadSecret => {
                AuthFlowError::InvalidCredentials
            }
            CredentialsError::Internal(msg) => AuthFlowError::Internal(msg),
        }
    }
}

impl From<RegistrationError> for AuthFlowError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Duplicate(email) => AuthFlowError::Duplicate(email),
            RegistrationError::Invalid(msg) => AuthFlowError::InvalidInput(msg),
            RegistrationError::Internal(msg) => AuthFlowError::Internal(msg),
        }
    }
}

impl From<JwtError> for AuthFlowError {
    fn from(err: JwtError) -> Self {
        AuthFlowError::Internal(err.to_string())
    }
}
