//! Profile upsert endpoint
//!
//! One idempotent operation creates or replaces the scalar half of the
//! caller's profile; the experience and education collections are never
//! touched here.

use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::model::{parse_skills, ProfileFields, SocialLinks};

use crate::database::models::ProfileRecord;
use crate::http_server::api::auth::Identity;
use crate::http_server::api::client::ApiRequest;
use crate::http_server::api::validate::FieldErrors;
use crate::ServiceState;

use super::me::ProfileResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertProfileRequest {
    #[serde(default)]
    pub status: String,
    /// Comma-separated list, e.g. "Rust, SQL,  CSS"
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
}

pub async fn handler(
    State(state): State<ServiceState>,
    identity: Identity,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<impl IntoResponse, UpsertProfileError> {
    let skills = parse_skills(&req.skills);

    let mut checks = FieldErrors::new();
    checks.require("status", &req.status, "Status is required");
    if skills.is_empty() {
        checks.push("skills", "Skills is required");
    }
    checks
        .into_result()
        .map_err(UpsertProfileError::Validation)?;

    let fields = ProfileFields {
        status: req.status,
        skills,
        company: req.company,
        website: req.website,
        location: req.location,
        bio: req.bio,
        github_username: req.github_username,
        social: req.social,
    };

    let profile = ProfileRecord::upsert(identity.account_id, fields, state.database()).await?;

    Ok(Json(ProfileResponse { profile }))
}

#[derive(Debug, thiserror::Error)]
pub enum UpsertProfileError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for UpsertProfileError {
    fn into_response(self) -> Response {
        match self {
            UpsertProfileError::Validation(errors) => errors.into_response(),
            UpsertProfileError::Database(err) => {
                tracing::error!("profile upsert failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for UpsertProfileRequest {
    type Response = ProfileResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/profiles").unwrap();
        client.post(full_url).json(&self)
    }
}
