use auth::TokenPair;
use axum::body::Bytes;
use axum::extract::State;
use serde::Deserialize;

use super::parse_body;
use super::ApiError;
use super::ApiReply;
use crate::domain::auth::models::LoginCommand;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ApiReply<TokenPair>, ApiError> {
    let body: LoginRequestBody = parse_body(&body)?;

    Ok(state.auth_service.login(body.into()).await.into())
}

/// HTTP request body for login (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl From<LoginRequestBody> for LoginCommand {
    fn from(body: LoginRequestBody) -> Self {
        LoginCommand {
            email: body.email,
            password: body.password,
        }
    }
}
