use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UserIdentity;
use crate::user::errors::CredentialsError;
use crate::user::errors::RegistrationError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Acts as both the credential validator (login) and the registrar
/// (sign-up) on top of an injected user store.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn validate_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserIdentity, CredentialsError> {
        // A malformed address cannot match any account
        let user = match EmailAddress::new(email.to_string()) {
            Ok(email) => self.repository.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            let password_hasher = self.password_hasher;
            let password = password.to_string();
            run_blocking(move || password_hasher.verify_decoy(&password))
                .await
                .map_err(CredentialsError::Internal)?;
            tracing::debug!(email = %email, "Login attempt for unknown account");
            return Err(CredentialsError::NotFound);
        };

        let password_hasher = self.password_hasher;
        let password = password.to_string();
        let password_hash = user.password_hash.clone();
        let matches = run_blocking(move || password_hasher.verify(&password, &password_hash))
            .await
            .map_err(CredentialsError::Internal)?
            .map_err(|e| {
                tracing::error!(
                    user_id = %user.id,
                    error = %e,
                    "Stored password hash is unreadable"
                );
                CredentialsError::Internal(e.to_string())
            })?;

        if !matches {
            tracing::debug!(user_id = %user.id, "Password mismatch");
            return Err(CredentialsError::BadSecret);
        }

        Ok(user.identity())
    }

    async fn register(
        &self,
        command: RegisterUserCommand,
    ) -> Result<UserIdentity, RegistrationError> {
        let email = EmailAddress::new(command.email)?;
        let password = Password::new(command.password)?;
        let name = command
            .name
            .filter(|name| !name.trim().is_empty())
            .map(DisplayName::new)
            .transpose()?;

        let password_hasher = self.password_hasher;
        let password_hash = run_blocking(move || password_hasher.hash(password.expose()))
            .await
            .map_err(RegistrationError::Internal)?
            .map_err(|e| RegistrationError::Internal(e.to_string()))?;

        let user = NewUser {
            email,
            name,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(
            user_id = %created_user.id,
            email = %created_user.email,
            "User registered"
        );

        Ok(created_user.identity())
    }
}

/// Run argon2 work on the blocking pool so it does not stall the async workers.
async fn run_blocking<T, F>(work: F) -> Result<T, String>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| format!("Password task failed: {}", e))
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use tokio::sync::Notify;

    use super::*;
    use crate::domain::user::models::User;
    use crate::domain::user::models::UserId;
    use crate::user::errors::RepositoryError;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, RepositoryError>;
        }
    }

    fn stored_user(id: i64, email: &str, password: &str) -> User {
        User {
            id: UserId(id),
            email: EmailAddress::new(email.to_string()).unwrap(),
            name: None,
            password_hash: auth::PasswordHasher::new().hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_validate_credentials_success() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user(7, "a@x.com", "correct");
        repository
            .expect_find_by_email()
            .withf(|email| email.as_str() == "a@x.com")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository));

        let identity = service
            .validate_credentials("a@x.com", "correct")
            .await
            .expect("Credentials should be valid");
        assert_eq!(identity.id, UserId(7));
        assert_eq!(identity.email.as_str(), "a@x.com");
    }

    #[tokio::test]
    async fn test_validate_credentials_bad_secret() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user(7, "a@x.com", "correct");
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository));

        let result = service.validate_credentials("a@x.com", "wrong").await;
        assert_eq!(result, Err(CredentialsError::BadSecret));
    }

    #[tokio::test]
    async fn test_validate_credentials_not_found() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.validate_credentials("nobody@x.com", "whatever").await;
        assert_eq!(result, Err(CredentialsError::NotFound));
    }

    #[tokio::test]
    async fn test_validate_credentials_malformed_email_skips_store() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_email().times(0);

        let service = UserService::new(Arc::new(repository));

        let result = service.validate_credentials("not-an-email", "whatever").await;
        assert_eq!(result, Err(CredentialsError::NotFound));
    }

    #[tokio::test]
    async fn test_validate_credentials_store_failure() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(RepositoryError::Database("connection refused".to_string())));

        let service = UserService::new(Arc::new(repository));

        let result = service.validate_credentials("a@x.com", "correct").await;
        assert!(matches!(result, Err(CredentialsError::Internal(_))));
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "new@x.com"
                    && user.name.as_ref().map(|n| n.as_str()) == Some("Alice")
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: UserId(1),
                    email: user.email,
                    name: user.name,
                    password_hash: user.password_hash,
                    created_at: user.created_at,
                })
            });

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand::new(
            "new@x.com".to_string(),
            "password123".to_string(),
            Some("Alice".to_string()),
        );

        let identity = service.register(command).await.expect("Registration failed");
        assert_eq!(identity.id, UserId(1));
        assert_eq!(identity.email.as_str(), "new@x.com");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|user| Err(RepositoryError::EmailAlreadyExists(user.email.to_string())));

        let service = UserService::new(Arc::new(repository));

        let command =
            RegisterUserCommand::new("a@x.com".to_string(), "password123".to_string(), None);

        let result = service.register(command).await;
        assert_eq!(result, Err(RegistrationError::Duplicate("a@x.com".to_string())));
    }

    #[tokio::test]
    async fn test_register_invalid_attributes_never_reach_store() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository));

        let cases = [
            RegisterUserCommand::new(String::new(), "password123".to_string(), None),
            RegisterUserCommand::new("not-an-email".to_string(), "password123".to_string(), None),
            RegisterUserCommand::new("a@x.com".to_string(), String::new(), None),
            RegisterUserCommand::new("a@x.com".to_string(), "short".to_string(), None),
            RegisterUserCommand::new(
                "a@x.com".to_string(),
                "password123".to_string(),
                Some("x".repeat(100)),
            ),
        ];

        for command in cases {
            let result = service.register(command).await;
            assert!(matches!(result, Err(RegistrationError::Invalid(_))));
        }
    }

    #[tokio::test]
    async fn test_register_blank_name_is_dropped() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| user.name.is_none())
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: UserId(2),
                    email: user.email,
                    name: user.name,
                    password_hash: user.password_hash,
                    created_at: user.created_at,
                })
            });

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand::new(
            "b@x.com".to_string(),
            "password123".to_string(),
            Some("   ".to_string()),
        );

        assert!(service.register(command).await.is_ok());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_password_check_yields_to_other_tasks() {
        let mut repository = MockTestUserRepository::new();

        let looked_up = Arc::new(Notify::new());
        let signal = Arc::clone(&looked_up);
        let user = stored_user(7, "a@x.com", "correct");
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| {
                signal.notify_one();
                Ok(Some(user.clone()))
            });

        let service = Arc::new(UserService::new(Arc::new(repository)));
        let login = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.validate_credentials("a@x.com", "correct").await }
        });

        // The only worker thread is free again while the hash is verified
        looked_up.notified().await;
        assert!(!login.is_finished());

        let identity = login.await.unwrap().expect("Credentials should be valid");
        assert_eq!(identity.id, UserId(7));
    }
}
