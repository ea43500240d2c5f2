use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email is required")]
    Missing,

    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for registration password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password is required")]
    Missing,

    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Error for DisplayName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DisplayNameError {
    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error raised by user store adapters
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Why a set of credentials was not accepted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("No account matches these credentials")]
    NotFound,

    #[error("Password does not match")]
    BadSecret,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Why a registration was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("User with email {0} already exists")]
    Duplicate(String),

    #[error("{0}")]
    Invalid(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<EmailError> for RegistrationError {
    fn from(err: EmailError) -> Self {
        RegistrationError::Invalid(err.to_string())
    }
}

impl From<PasswordPolicyError> for RegistrationError {
    fn from(err: PasswordPolicyError) -> Self {
        RegistrationError::Invalid(err.to_string())
    }
}

impl From<DisplayNameError> for RegistrationError {
    fn from(err: DisplayNameError) -> Self {
        RegistrationError::Invalid(err.to_string())
    }
}

impl From<RepositoryError> for RegistrationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::EmailAlreadyExists(email) => RegistrationError::Duplicate(email),
            RepositoryError::Database(msg) => RegistrationError::Internal(msg),
        }
    }
}

impl From<RepositoryError> for CredentialsError {
    fn from(err: RepositoryError) -> Self {
        CredentialsError::Internal(err.to_string())
    }
}
