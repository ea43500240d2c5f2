use serde::Serialize;

use crate::domain::auth::errors::AuthFlowError;

/// Uniform result of every auth flow operation.
///
/// Carries a displayable message and a status code on both paths; `payload`
/// is only ever present on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<T> {
    pub message: String,
    pub status_code: u16,
    pub payload: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<String>, status_code: u16, payload: T) -> Self {
        Self {
            message: message.into(),
            status_code,
            payload: Some(payload),
        }
    }

    /// Success without a body, as returned by registration.
    pub fn empty(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
            payload: None,
        }
    }

    pub fn failure(err: &AuthFlowError) -> Self {
        Self {
            message: err.to_string(),
            status_code: err.status_code(),
            payload: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code < 400
    }
}

impl<T> From<AuthFlowError> for Envelope<T> {
    fn from(err: AuthFlowError) -> Self {
        Envelope::failure(&err)
    }
}

/// Login request as consumed by the flow.
#[derive(Debug, Clone, Default)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// Refresh request; the token is optional so its absence can be reported.
#[derive(Debug, Clone, Default)]
pub struct RefreshCommand {
    pub access_token: Option<String>,
}

/// Payload of a successful refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshedToken {
    pub token: String,
}
