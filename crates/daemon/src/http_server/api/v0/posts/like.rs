//! Like endpoint
//!
//! A duplicate like is a rejected operation, not a silent no-op.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::PostRecord;
use crate::http_server::api::auth::Identity;
use crate::http_server::api::client::ApiRequest;
use crate::ServiceState;

use super::create::PostResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikePostRequest {
    pub post_id: Uuid,
}

pub async fn handler(
    State(state): State<ServiceState>,
    identity: Identity,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse, LikePostError> {
    let mut post = PostRecord::get(post_id, state.database())
        .await?
        .ok_or(LikePostError::PostNotFound)?;

    post.add_like(identity.account_id)
        .map_err(|_| LikePostError::AlreadyLiked)?;
    PostRecord::save(&post, state.database()).await?;

    Ok(Json(PostResponse { post }))
}

#[derive(Debug, thiserror::Error)]
pub enum LikePostError {
    #[error("post not found")]
    PostNotFound,
    #[error("post already liked")]
    AlreadyLiked,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for LikePostError {
    fn into_response(self) -> Response {
        match self {
            LikePostError::PostNotFound => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "post not found"})),
            )
                .into_response(),
            LikePostError::AlreadyLiked => (
                http::StatusCode::CONFLICT,
                Json(serde_json::json!({
                    "errors": [{"message": "Post already liked", "field": "likes"}]
                })),
            )
                .into_response(),
            LikePostError::Database(err) => {
                tracing::error!("liking post failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for LikePostRequest {
    type Response = PostResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/api/v0/posts/{}/like", self.post_id))
            .unwrap();
        client.put(full_url)
    }
}
