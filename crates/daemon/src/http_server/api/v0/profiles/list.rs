use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::prelude::Profile;

use crate::database::models::ProfileRecord;
use crate::http_server::api::client::ApiRequest;
use crate::ServiceState;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProfilesRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListProfilesResponse {
    pub profiles: Vec<Profile>,
}

pub async fn handler(
    State(state): State<ServiceState>,
) -> Result<impl IntoResponse, ListProfilesError> {
    let profiles = ProfileRecord::list(state.database()).await?;

    Ok(Json(ListProfilesResponse { profiles }))
}

#[derive(Debug, thiserror::Error)]
pub enum ListProfilesError {
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ListProfilesError {
    fn into_response(self) -> Response {
        let ListProfilesError::Database(err) = self;
        tracing::error!("profile listing failed: {err}");
        (
            http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"msg": "internal server error"})),
        )
            .into_response()
    }
}

impl ApiRequest for ListProfilesRequest {
    type Response = ListProfilesResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/profiles").unwrap();
        client.get(full_url)
    }
}
