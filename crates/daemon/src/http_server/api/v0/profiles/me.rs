use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::prelude::Profile;

use crate::database::models::ProfileRecord;
use crate::http_server::api::auth::Identity;
use crate::http_server::api::client::ApiRequest;
use crate::ServiceState;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MyProfileRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: Profile,
}

pub async fn handler(
    State(state): State<ServiceState>,
    identity: Identity,
) -> Result<impl IntoResponse, MyProfileError> {
    let profile = ProfileRecord::get_by_account(identity.account_id, state.database())
        .await?
        .ok_or(MyProfileError::NoProfile)?;

    Ok(Json(ProfileResponse { profile }))
}

#[derive(Debug, thiserror::Error)]
pub enum MyProfileError {
    #[error("no profile for this account")]
    NoProfile,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for MyProfileError {
    fn into_response(self) -> Response {
        match self {
            MyProfileError::NoProfile => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "there is no profile for this account"})),
            )
                .into_response(),
            MyProfileError::Database(err) => {
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

impl ApiRequest for MyProfileRequest {
    type Response = ProfileResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/profiles/me").unwrap();
        client.get(full_url)
    }
}
