use axum::body::Bytes;
use axum::extract::State;
use serde::Deserialize;

use super::parse_body;
use super::ApiError;
use super::ApiReply;
use crate::domain::auth::models::RefreshCommand;
use crate::domain::auth::models::RefreshedToken;
use crate::inbound::http::router::AppState;

pub async fn refresh(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ApiReply<RefreshedToken>, ApiError> {
    let body: RefreshRequestBody = parse_body(&body)?;

    Ok(state.auth_service.refresh(body.into()).await.into())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequestBody {
    #[serde(default)]
    access_token: Option<String>,
}

impl From<RefreshRequestBody> for RefreshCommand {
    fn from(body: RefreshRequestBody) -> Self {
        RefreshCommand {
            access_token: body.access_token,
        }
    }
}
