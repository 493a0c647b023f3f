use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::model::NewEducation;

use crate::database::models::ProfileRecord;
use crate::http_server::api::auth::Identity;
use crate::http_server::api::client::ApiRequest;
use crate::http_server::api::validate::FieldErrors;
use crate::ServiceState;

use super::me::ProfileResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddEducationRequest {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field_of_study: String,
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
    Json(req): Json<AddEducationRequest>,
) -> Result<impl IntoResponse, AddEducationError> {
    let mut checks = FieldErrors::new();
    checks.require("school", &req.school, "School is required");
    checks.require("degree", &req.degree, "Degree is required");
    checks.require(
        "field_of_study",
        &req.field_of_study,
        "Field of study is required",
    );
    let from = match req.from {
        Some(from) => from,
        None => {
            checks.push("from", "From date is required");
            return Err(AddEducationError::Validation(checks));
        }
    };
    checks.into_result().map_err(AddEducationError::Validation)?;

    let mut profile = ProfileRecord::get_by_account(identity.account_id, state.database())
        .await?
        .ok_or(AddEducationError::NoProfile)?;

    profile.add_education(NewEducation {
        school: req.school,
        degree: req.degree,
        field_of_study: req.field_of_study,
        from,
        to: req.to,
        current: req.current,
        description: req.description,
    });
    ProfileRecord::save(&profile, state.database()).await?;

    Ok(Json(ProfileResponse { profile }))
}

#[derive(Debug, thiserror::Error)]
pub enum AddEducationError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("no profile for this account")]
    NoProfile,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AddEducationError {
    fn into_response(self) -> Response {
        match self {
            AddEducationError::Validation(errors) => errors.into_response(),
            AddEducationError::NoProfile => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "there is no profile for this account"})),
            )
                .into_response(),
            AddEducationError::Database(err) => {
                tracing::error!("adding education failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for AddEducationRequest {
    type Response = ProfileResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/profiles/education").unwrap();
        client.put(full_url).json(&self)
    }
}
