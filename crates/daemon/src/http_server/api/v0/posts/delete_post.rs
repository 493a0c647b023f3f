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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostRequest {
    pub post_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostResponse {
    pub msg: String,
}

/// Only the post owner may delete it.
pub async fn handler(
    State(state): State<ServiceState>,
    identity: Identity,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse, DeletePostError> {
    let post = PostRecord::get(post_id, state.database())
        .await?
        .ok_or(DeletePostError::PostNotFound)?;

    if !post.is_owned_by(identity.account_id) {
        return Err(DeletePostError::NotOwner);
    }

    PostRecord::delete(post_id, state.database()).await?;

    Ok(Json(DeletePostResponse {
        msg: "post removed".to_string(),
    }))
}

#[derive(Debug, thiserror::Error)]
pub enum DeletePostError {
    #[error("post not found")]
    PostNotFound,
    #[error("caller does not own this post")]
    NotOwner,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for DeletePostError {
    fn into_response(self) -> Response {
        match self {
            DeletePostError::PostNotFound => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "post not found"})),
            )
                .into_response(),
            DeletePostError::NotOwner => (
                http::StatusCode::FORBIDDEN,
                Json(serde_json::json!({"msg": "not authorized to delete this post"})),
            )
                .into_response(),
            DeletePostError::Database(err) => {
                tracing::error!("post deletion failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for DeletePostRequest {
    type Response = DeletePostResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/api/v0/posts/{}", self.post_id))
            .unwrap();
        client.delete(full_url)
    }
}
