use axum::body::Bytes;
use axum::extract::State;
use serde::Deserialize;

use super::parse_body;
use super::ApiError;
use super::ApiReply;
use crate::domain::user::models::RegisterUserCommand;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ApiReply<()>, ApiError> {
    let body: RegisterRequestBody = parse_body(&body)?;

    Ok(state.auth_service.register(body.into()).await.into())
}

/// HTTP request body for registration (raw JSON)
///
/// Unknown attributes are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    name: Option<String>,
}

impl From<RegisterRequestBody> for RegisterUserCommand {
    fn from(body: RegisterRequestBody) -> Self {
        RegisterUserCommand::new(body.email, body.password, body.name)
    }
}
