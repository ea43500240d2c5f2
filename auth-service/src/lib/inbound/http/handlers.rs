use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::auth::models::Envelope;

pub mod login;
pub mod refresh;
pub mod register;

/// HTTP rendering of an [`Envelope`]: the status line mirrors `statusCode`.
#[derive(Debug, Clone)]
pub struct ApiReply<T: Serialize>(StatusCode, Json<ApiResponseBody<T>>);

impl<T: Serialize> From<Envelope<T>> for ApiReply<T> {
    fn from(envelope: Envelope<T>) -> Self {
        let status =
            StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        ApiReply(
            status,
            Json(ApiResponseBody {
                message: envelope.message,
                status_code: status.as_u16(),
                payload: envelope.payload,
            }),
        )
    }
}

impl<T: Serialize> IntoResponse for ApiReply<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Failures detected before a request reaches the auth flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        ApiReply::<()>::from(Envelope::empty(message, status.as_u16())).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponseBody<T: Serialize> {
    message: String,
    status_code: u16,
    payload: Option<T>,
}

/// Parse a JSON request body, treating an empty body as `{}`.
///
/// Missing fields are left to the flows so they can answer with their own
/// messages; only syntactically broken JSON is rejected here.
pub(crate) fn parse_body<T>(body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        ApiError::BadRequest("Malformed request body".to_string())
    })
}
