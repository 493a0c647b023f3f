use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::prelude::Account;

use crate::database::models::AccountRecord;
use crate::http_server::api::auth::Identity;
use crate::http_server::api::client::ApiRequest;
use crate::ServiceState;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub account: Account,
}

/// The authenticated caller's account. A validly signed token whose
/// account has since been deleted gets 404, not 401.
pub async fn handler(
    State(state): State<ServiceState>,
    identity: Identity,
) -> Result<impl IntoResponse, MeError> {
    let account = AccountRecord::get(identity.account_id, state.database())
        .await?
        .ok_or(MeError::AccountGone)?;

    Ok(Json(MeResponse { account }))
}

#[derive(Debug, thiserror::Error)]
pub enum MeError {
    #[error("account no longer exists")]
    AccountGone,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for MeError {
    fn into_response(self) -> Response {
        match self {
            MeError::AccountGone => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "account not found"})),
            )
                .into_response(),
            MeError::Database(err) => {
                tracing::error!("account lookup failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for MeRequest {
    type Response = MeResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/accounts/me").unwrap();
        client.get(full_url)
    }
}
