//! Account deletion endpoint
//!
//! Removes the caller's posts, profile and account in that order. The
//! three deletes are independent single-document operations with no
//! rollback on partial failure.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use crate::database::models::delete_account_cascade;
use crate::http_server::api::auth::Identity;
use crate::http_server::api::client::ApiRequest;
use crate::ServiceState;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteAccountRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAccountResponse {
    pub msg: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
    identity: Identity,
) -> Result<impl IntoResponse, DeleteAccountError> {
    let deleted = delete_account_cascade(identity.account_id, state.database()).await?;
    if !deleted {
        return Err(DeleteAccountError::AccountGone);
    }

    Ok(Json(DeleteAccountResponse {
        msg: "account deleted".to_string(),
    }))
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("account no longer exists")]
    AccountGone,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for DeleteAccountError {
    fn into_response(self) -> Response {
        match self {
            DeleteAccountError::AccountGone => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "account not found"})),
            )
                .into_response(),
            DeleteAccountError::Database(err) => {
                tracing::error!("account deletion failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for DeleteAccountRequest {
    type Response = DeleteAccountResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/profiles").unwrap();
        client.delete(full_url)
    }
}
