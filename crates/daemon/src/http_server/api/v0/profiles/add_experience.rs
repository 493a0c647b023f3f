use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::model::NewExperience;

use crate::database::models::ProfileRecord;
use crate::http_server::api::auth::Identity;
use crate::http_server::api::client::ApiRequest;
use crate::http_server::api::validate::FieldErrors;
use crate::ServiceState;

use super::me::ProfileResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddExperienceRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

pub async fn handler(
    State(state): State<ServiceState>,
    identity: Identity,
    Json(req): Json<AddExperienceRequest>,
) -> Result<impl IntoResponse, AddExperienceError> {
    let mut checks = FieldErrors::new();
    checks.require("title", &req.title, "Title is required");
    checks.require("company", &req.company, "Company is required");
    let from = match req.from {
        Some(from) => from,
        None => {
            checks.push("from", "From date is required");
            return Err(AddExperienceError::Validation(checks));
        }
    };
    checks
        .into_result()
        .map_err(AddExperienceError::Validation)?;

    let mut profile = ProfileRecord::get_by_account(identity.account_id, state.database())
        .await?
        .ok_or(AddExperienceError::NoProfile)?;

    profile.add_experience(NewExperience {
        title: req.title,
        company: req.company,
        location: req.location,
        from,
        to: req.to,
        current: req.current,
        description: req.description,
    });
    ProfileRecord::save(&profile, state.database()).await?;

    Ok(Json(ProfileResponse { profile }))
}

#[derive(Debug, thiserror::Error)]
pub enum AddExperienceError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("no profile for this account")]
    NoProfile,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AddExperienceError {
    fn into_response(self) -> Response {
        match self {
            AddExperienceError::Validation(errors) => errors.into_response(),
            AddExperienceError::NoProfile => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "there is no profile for this account"})),
            )
                .into_response(),
            AddExperienceError::Database(err) => {
                tracing::error!("adding experience failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for AddExperienceRequest {
    type Response = ProfileResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/profiles/experience").unwrap();
        client.put(full_url).json(&self)
    }
}
