//! Login endpoint: email + password in, bearer token out

use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::auth::{verify_password, PasswordError, TokenError};

use crate::database::models::AccountRecord;
use crate::http_server::api::client::ApiRequest;
use crate::http_server::api::validate::FieldErrors;
use crate::ServiceState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, LoginError> {
    let mut checks = FieldErrors::new();
    if !req.email.contains('@') {
        checks.push("email", "Please include a valid email");
    }
    checks.require("password", &req.password, "Password is required");
    checks.into_result().map_err(LoginError::Validation)?;

    // an unknown email and a wrong password are indistinguishable to the
    // caller
    let account = AccountRecord::get_by_email(&req.email, state.database())
        .await?
        .ok_or(LoginError::BadCredentials)?;

    if !verify_password(&req.password, &account.password_hash)? {
        return Err(LoginError::BadCredentials);
    }

    let token = state.auth().mint(account.id)?;

    Ok(Json(LoginResponse { token }))
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("invalid credentials")]
    BadCredentials,
    #[error("password verification failed: {0}")]
    Password(#[from] PasswordError),
    #[error("token minting failed: {0}")]
    Token(#[from] TokenError),
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        match self {
            LoginError::Validation(errors) => errors.into_response(),
            LoginError::BadCredentials => (
                http::StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({"msg": "invalid credentials"})),
            )
                .into_response(),
            err => {
                tracing::error!("login failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/sessions").unwrap();
        client.post(full_url).json(&self)
    }
}
