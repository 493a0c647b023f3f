//! Post creation endpoint

use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::prelude::Post;

use crate::database::models::{AccountRecord, PostRecord};
use crate::http_server::api::auth::Identity;
use crate::http_server::api::client::ApiRequest;
use crate::http_server::api::validate::FieldErrors;
use crate::ServiceState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub post: Post,
}

pub async fn handler(
    State(state): State<ServiceState>,
    identity: Identity,
    Json(req): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, CreatePostError> {
    let mut checks = FieldErrors::new();
    checks.require("text", &req.text, "Text is required");
    checks.into_result().map_err(CreatePostError::Validation)?;

    // the author snapshot (name + avatar) comes from the live account
    let account = AccountRecord::get(identity.account_id, state.database())
        .await?
        .ok_or(CreatePostError::AccountGone)?;

    let post = Post::new(&account, req.text);
    PostRecord::create(&post, state.database()).await?;

    Ok(Json(PostResponse { post }))
}

#[derive(Debug, thiserror::Error)]
pub enum CreatePostError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("account no longer exists")]
    AccountGone,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for CreatePostError {
    fn into_response(self) -> Response {
        match self {
            CreatePostError::Validation(errors) => errors.into_response(),
            CreatePostError::AccountGone => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "account not found"})),
            )
                .into_response(),
            CreatePostError::Database(err) => {
                tracing::error!("post creation failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for CreatePostRequest {
    type Response = PostResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/posts").unwrap();
        client.post(full_url).json(&self)
    }
}
