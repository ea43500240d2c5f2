use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenIssuer;
use auth::TokenPair;
use auth::TokenType;

use crate::domain::auth::errors::AuthFlowError;
use crate::domain::auth::models::Envelope;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RefreshCommand;
use crate::domain::auth::models::RefreshedToken;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::RegisterUserCommand;
use crate::user::ports::UserServicePort;

/// Orchestrates login, refresh and registration.
///
/// Holds no per-request state. Tokens are only minted after the user
/// service has answered.
pub struct AuthService<US>
where
    US: UserServicePort,
{
    user_service: Arc<US>,
    token_issuer: Arc<TokenIssuer>,
}

impl<US> AuthService<US>
where
    US: UserServicePort,
{
    /// # Arguments
    /// * `user_service` - Credential validator and registrar
    /// * `token_issuer` - Token minting policy built from the resolved `AuthConfig`
    pub fn new(user_service: Arc<US>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            user_service,
            token_issuer,
        }
    }

    async fn try_login(&self, command: LoginCommand) -> Result<TokenPair, AuthFlowError> {
        if command.email.trim().is_empty() || command.password.is_empty() {
            return Err(AuthFlowError::MissingInput(
                "Email and password are required".to_string(),
            ));
        }

        let identity = self
            .user_service
            .validate_credentials(&command.email, &command.password)
            .await?;

        let tokens = self.token_issuer.issue_pair(identity.id.as_i64())?;
        tracing::info!(user_id = %identity.id, "Login successful");

        Ok(tokens)
    }

    fn try_refresh(&self, command: RefreshCommand) -> Result<RefreshedToken, AuthFlowError> {
        let access_token = command
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AuthFlowError::MissingInput("No access token in body".to_string()))?;

        let claims = self.token_issuer.validate(&access_token)?;

        // Only an access token may be exchanged for a new refresh token
        if claims.token_type != TokenType::Access {
            tracing::warn!(
                user_id = claims.id,
                token_type = %claims.token_type,
                "Refresh attempted with wrong token type"
            );
            return Err(AuthFlowError::WrongTokenType);
        }

        let token = self.token_issuer.issue(claims.id, TokenType::Refresh)?;
        tracing::info!(user_id = claims.id, "Refresh token issued");

        Ok(RefreshedToken { token })
    }

    async fn try_register(&self, command: RegisterUserCommand) -> Result<(), AuthFlowError> {
        self.user_service.register(command).await?;
        Ok(())
    }
}

#[async_trait]
impl<US> AuthServicePort for AuthService<US>
where
    US: UserServicePort,
{
    async fn login(&self, command: LoginCommand) -> Envelope<TokenPair> {
        match self.try_login(command).await {
            Ok(tokens) => Envelope::success("Login successful", 200, tokens),
            Err(err) => reject("login", err),
        }
    }

    async fn refresh(&self, command: RefreshCommand) -> Envelope<RefreshedToken> {
        match self.try_refresh(command) {
            Ok(token) => Envelope::success("Token created successfully", 200, token),
            Err(err) => reject("refresh", err),
        }
    }

    async fn register(&self, command: RegisterUserCommand) -> Envelope<()> {
        match self.try_register(command).await {
            Ok(()) => Envelope::empty("User created successfully", 201),
            Err(err) => reject("register", err),
        }
    }
}

fn reject<T>(operation: &'static str, err: AuthFlowError) -> Envelope<T> {
    match &err {
        AuthFlowError::Internal(detail) => {
            tracing::error!(operation, error = %detail, "Auth flow failed")
        }
        _ => tracing::warn!(operation, reason = %err, "Auth flow rejected"),
    }
    Envelope::from(err)
}
