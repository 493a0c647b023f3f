use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::ProfileRecord;
use crate::http_server::api::client::ApiRequest;
use crate::ServiceState;

use super::me::ProfileResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProfileRequest {
    pub account_id: Uuid,
}

/// Public lookup of any account's profile.
pub async fn handler(
    State(state): State<ServiceState>,
    Path(account_id): Path<Uuid>,
) -> Result<impl IntoResponse, GetProfileError> {
    let profile = ProfileRecord::get_by_account(account_id, state.database())
        .await?
        .ok_or(GetProfileError::NoProfile)?;

    Ok(Json(ProfileResponse { profile }))
}

#[derive(Debug, thiserror::Error)]
pub enum GetProfileError {
    #[error("no profile for this account")]
    NoProfile,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for GetProfileError {
    fn into_response(self) -> Response {
        match self {
            GetProfileError::NoProfile => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "there is no profile for this account"})),
            )
                .into_response(),
            GetProfileError::Database(err) => {
                tracing::error!("profile lookup failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for GetProfileRequest {
    type Response = ProfileResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/api/v0/profiles/account/{}", self.account_id))
            .unwrap();
        client.get(full_url)
    }
}
