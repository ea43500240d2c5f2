use async_trait::async_trait;
use auth::TokenPair;

use crate::domain::auth::models::Envelope;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RefreshCommand;
use crate::domain::auth::models::RefreshedToken;
use crate::domain::user::models::RegisterUserCommand;

/// Port for the three token flows exposed to clients.
///
/// Every operation returns an [`Envelope`]; failures are values, never panics
/// or transport errors.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange valid credentials for an access/refresh token pair.
    async fn login(&self, command: LoginCommand) -> Envelope<TokenPair>;

    /// Exchange a valid access token for a fresh refresh token.
    async fn refresh(&self, command: RefreshCommand) -> Envelope<RefreshedToken>;

    /// Create an account. Success carries no payload.
    async fn register(&self, command: RegisterUserCommand) -> Envelope<()>;
}
