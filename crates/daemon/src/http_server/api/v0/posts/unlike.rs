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
pub struct UnlikePostRequest {
    pub post_id: Uuid,
}

/// Unliking without an existing like is 404, mirroring the not-found
/// policy for absent sub-records.
pub async fn handler(
    State(state): State<ServiceState>,
    identity: Identity,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse, UnlikePostError> {
    let mut post = PostRecord::get(post_id, state.database())
        .await?
        .ok_or(UnlikePostError::PostNotFound)?;

    post.remove_like(identity.account_id)
        .map_err(|_| UnlikePostError::NotLiked)?;
    PostRecord::save(&post, state.database()).await?;

    Ok(Json(PostResponse { post }))
}

#[derive(Debug, thiserror::Error)]
pub enum UnlikePostError {
    #[error("post not found")]
    PostNotFound,
    #[error("post has not been liked")]
    NotLiked,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for UnlikePostError {
    fn into_response(self) -> Response {
        match self {
            UnlikePostError::PostNotFound => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "post not found"})),
            )
                .into_response(),
            UnlikePostError::NotLiked => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "post has not yet been liked"})),
            )
                .into_response(),
            UnlikePostError::Database(err) => {
                tracing::error!("unliking post failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for UnlikePostRequest {
    type Response = PostResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/api/v0/posts/{}/unlike", self.post_id))
            .unwrap();
        client.put(full_url)
    }
}
