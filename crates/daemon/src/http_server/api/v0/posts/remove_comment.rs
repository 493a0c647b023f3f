//! Comment removal endpoint
//!
//! Gated on the post owner, not the comment author. A commenter cannot
//! delete their own comment from someone else's post.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::model::CommentError;

use crate::database::models::PostRecord;
use crate::http_server::api::auth::Identity;
use crate::http_server::api::client::ApiRequest;
use crate::ServiceState;

use super::create::PostResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveCommentRequest {
    pub post_id: Uuid,
    pub comment_id: Uuid,
}

pub async fn handler(
    State(state): State<ServiceState>,
    identity: Identity,
    Path((post_id, comment_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, RemoveCommentError> {
    let mut post = PostRecord::get(post_id, state.database())
        .await?
        .ok_or(RemoveCommentError::PostNotFound)?;

    post.remove_comment(identity.account_id, comment_id)
        .map_err(|e| match e {
            CommentError::NotOwner => RemoveCommentError::NotOwner,
            CommentError::NotFound => RemoveCommentError::CommentNotFound,
        })?;
    PostRecord::save(&post, state.database()).await?;

    Ok(Json(PostResponse { post }))
}

#[derive(Debug, thiserror::Error)]
pub enum RemoveCommentError {
    #[error("post not found")]
    PostNotFound,
    #[error("comment not found")]
    CommentNotFound,
    #[error("caller does not own this post")]
    NotOwner,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for RemoveCommentError {
    fn into_response(self) -> Response {
        match self {
            RemoveCommentError::PostNotFound => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "post not found"})),
            )
                .into_response(),
            RemoveCommentError::CommentNotFound => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "comment not found"})),
            )
                .into_response(),
            RemoveCommentError::NotOwner => (
                http::StatusCode::FORBIDDEN,
                Json(serde_json::json!({"msg": "not authorized to remove this comment"})),
            )
                .into_response(),
            RemoveCommentError::Database(err) => {
                tracing::error!("removing comment failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for RemoveCommentRequest {
    type Response = PostResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!(
                "/api/v0/posts/{}/comments/{}",
                self.post_id, self.comment_id
            ))
            .unwrap();
        client.delete(full_url)
    }
}
