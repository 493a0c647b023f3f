use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::ServiceState;

/// Header carrying the bearer token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// The authenticated caller. Extracting this rejects the request with 401
/// before the handler body runs.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub account_id: Uuid,
}

#[axum::async_trait]
impl FromRequestParts<ServiceState> for Identity {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServiceState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let account_id = state
            .auth()
            .verify(token)
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(Identity { account_id })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("no token presented")]
    MissingToken,
    #[error("token is not valid")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let msg = match self {
            AuthError::MissingToken => "no token, authorization denied",
            AuthError::InvalidToken => "token is not valid",
        };
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({"msg": msg})),
        )
            .into_response()
    }
}
