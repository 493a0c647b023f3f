use axum::extract::{Json, Path, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::{AccountRecord, PostRecord};
use crate::http_server::api::auth::Identity;
use crate::http_server::api::client::ApiRequest;
use crate::http_server::api::validate::FieldErrors;
use crate::ServiceState;

use super::create::PostResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommentRequest {
    #[serde(skip)]
    pub post_id: Uuid,
    #[serde(default)]
    pub text: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
    identity: Identity,
    Path(post_id): Path<Uuid>,
    Json(req): Json<AddCommentRequest>,
) -> Result<impl IntoResponse, AddCommentError> {
    let mut checks = FieldErrors::new();
    checks.require("text", &req.text, "Text is required");
    checks.into_result().map_err(AddCommentError::Validation)?;

    let account = AccountRecord::get(identity.account_id, state.database())
        .await?
        .ok_or(AddCommentError::AccountGone)?;

    let mut post = PostRecord::get(post_id, state.database())
        .await?
        .ok_or(AddCommentError::PostNotFound)?;

    post.add_comment(&account, req.text);
    PostRecord::save(&post, state.database()).await?;

    Ok(Json(PostResponse { post }))
}

#[derive(Debug, thiserror::Error)]
pub enum AddCommentError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("account no longer exists")]
    AccountGone,
    #[error("post not found")]
    PostNotFound,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AddCommentError {
    fn into_response(self) -> Response {
        match self {
            AddCommentError::Validation(errors) => errors.into_response(),
            AddCommentError::AccountGone => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "account not found"})),
            )
                .into_response(),
            AddCommentError::PostNotFound => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "post not found"})),
            )
                .into_response(),
            AddCommentError::Database(err) => {
                tracing::error!("adding comment failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for AddCommentRequest {
    type Response = PostResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/api/v0/posts/{}/comments", self.post_id))
            .unwrap();
        client.post(full_url).json(&self)
    }
}
