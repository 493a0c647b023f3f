//! Account registration endpoint

use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::auth::{hash_password, PasswordError, TokenError};
use common::prelude::Account;

use crate::database::models::AccountRecord;
use crate::database::is_unique_violation;
use crate::http_server::api::client::ApiRequest;
use crate::http_server::api::validate::FieldErrors;
use crate::ServiceState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response carrying the freshly minted bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, RegisterError> {
    let mut checks = FieldErrors::new();
    checks.require("name", &req.name, "Name is required");
    if !req.email.contains('@') {
        checks.push("email", "Please include a valid email");
    }
    if req.password.len() < 6 {
        checks.push(
            "password",
            "Please enter a password with 6 or more characters",
        );
    }
    checks.into_result().map_err(RegisterError::Validation)?;

    if AccountRecord::get_by_email(&req.email, state.database())
        .await?
        .is_some()
    {
        return Err(RegisterError::EmailTaken);
    }

    let password_hash = hash_password(&req.password)?;
    let account = Account::new(req.name, req.email, password_hash);

    if let Err(e) = AccountRecord::create(&account, state.database()).await {
        // a concurrent registration with the same email loses the race here
        if is_unique_violation(&e) {
            return Err(RegisterError::EmailTaken);
        }
        return Err(RegisterError::Database(e));
    }

    let token = state.auth().mint(account.id)?;

    Ok(Json(RegisterResponse { token }))
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("an account with this email already exists")]
    EmailTaken,
    #[error("password hashing failed: {0}")]
    Password(#[from] PasswordError),
    #[error("token minting failed: {0}")]
    Token(#[from] TokenError),
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for RegisterError {
    fn into_response(self) -> Response {
        match self {
            RegisterError::Validation(errors) => errors.into_response(),
            RegisterError::EmailTaken => (
                http::StatusCode::CONFLICT,
                Json(serde_json::json!({
                    "errors": [{"message": "Account already exists", "field": "email"}]
                })),
            )
                .into_response(),
            err => {
                tracing::error!("account registration failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for RegisterRequest {
    type Response = RegisterResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/accounts").unwrap();
        client.post(full_url).json(&self)
    }
}
