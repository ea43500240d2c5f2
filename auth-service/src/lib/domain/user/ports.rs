use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserIdentity;
use crate::user::errors::CredentialsError;
use crate::user::errors::RegistrationError;
use crate::user::errors::RepositoryError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Check an email/password pair against the stored account.
    ///
    /// # Arguments
    /// * `email` - Identifier supplied by the client
    /// * `password` - Plaintext secret supplied by the client
    ///
    /// # Returns
    /// Identity of the matching account
    ///
    /// # Errors
    /// * `NotFound` - No account with this email
    /// * `BadSecret` - Password does not match the stored hash
    /// * `Internal` - User store operation failed
    async fn validate_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserIdentity, CredentialsError>;

    /// Create a new account from raw registration attributes.
    ///
    /// # Arguments
    /// * `command` - Email, password and optional name as received
    ///
    /// # Returns
    /// Identity of the created account
    ///
    /// # Errors
    /// * `Invalid` - Missing or malformed attribute
    /// * `Duplicate` - Email is already registered
    /// * `Internal` - User store or hashing failed
    async fn register(&self, command: RegisterUserCommand)
        -> Result<UserIdentity, RegistrationError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Arguments
    /// * `user` - Validated user data without an id
    ///
    /// # Returns
    /// Stored user entity with its assigned id
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered (nothing is written)
    /// * `Database` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, RepositoryError>;
}
