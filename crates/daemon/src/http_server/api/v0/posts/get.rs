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
pub struct GetPostRequest {
    pub post_id: Uuid,
}

pub async fn handler(
    State(state): State<ServiceState>,
    _identity: Identity,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse, GetPostError> {
    let post = PostRecord::get(post_id, state.database())
        .await?
        .ok_or(GetPostError::PostNotFound)?;

    Ok(Json(PostResponse { post }))
}

#[derive(Debug, thiserror::Error)]
pub enum GetPostError {
    #[error("post not found")]
    PostNotFound,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for GetPostError {
    fn into_response(self) -> Response {
        match self {
            GetPostError::PostNotFound => (
                http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"msg": "post not found"})),
            )
                .into_response(),
            GetPostError::Database(err) => {
                tracing::error!("post lookup failed: {err}");
                (
                    http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"msg": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl ApiRequest for GetPostRequest {
    type Response = PostResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/api/v0/posts/{}", self.post_id))
            .unwrap();
        client.get(full_url)
    }
}
