use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::ProfileRecord;
use crate::http_server::api::auth::Identity;
use crate::http_server::api::client::ApiRequest;
use crate::ServiceState;

use super::me::ProfileResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveExperienceRequest {
    pub entry_id: Uuid,
}

/// Removing an unknown entry id is 404, never a silent success, and the
/// collection is left unchanged.
pub async fn handler(
    State(state): State<ServiceState>,
    identity: Identity,
    Path(entry_id): Path<Uuid>,
) -> Result<impl IntoResponse, RemoveExperienceError> {
    let mut profile = ProfileRecord::get_by_account(identity.account_id, state.database())
        .await?
        .ok_or(RemoveExperienceError::NoProfile)?;

    profile
        .remove_experience(entry_id)
        .map_err(|_| RemoveExperienceError::EntryNotFound)?;
    ProfileRecord::save(&profile, state.database()).await?;

    Ok(Json(ProfileResponse { profile }))
}

#[derive(Debug, thiserror::Error)]
pub enum RemoveExperienceError {
    #[error("no profile for this account")]
    NoProfile,
    #[error("experience entry not found")]
    EntryNotFound,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for RemoveExperienceError {
    fn into_response(self) -> Response {
        match self {
            RemoveExperienceError::NoProfile => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "there is no profile for this account"})),
            )
                .into_response(),
            RemoveExperienceError::EntryNotFound => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "experience entry not found"})),
            )
                .into_response(),
            RemoveExperienceError::Database(err) => {
                tracing::error!("removing experience failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for RemoveExperienceRequest {
    type Response = ProfileResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/api/v0/profiles/experience/{}", self.entry_id))
            .unwrap();
        client.delete(full_url)
    }
}
