use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::prelude::Post;

use crate::database::models::PostRecord;
use crate::http_server::api::auth::Identity;
use crate::http_server::api::client::ApiRequest;
use crate::ServiceState;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPostsResponse {
    pub posts: Vec<Post>,
}

/// All posts, newest first.
pub async fn handler(
    State(state): State<ServiceState>,
    _identity: Identity,
) -> Result<impl IntoResponse, ListPostsError> {
    let posts = PostRecord::list(state.database()).await?;

    Ok(Json(ListPostsResponse { posts }))
}

#[derive(Debug, thiserror::Error)]
pub enum ListPostsError {
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ListPostsError {
    fn into_response(self) -> Response {
        let ListPostsError::Database(err) = self;
        tracing::error!("post listing failed: {err}");
        (
            http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"msg": "internal server error"})),
        )
            .into_response()
    }
}

impl ApiRequest for ListPostsRequest {
    type Response = ListPostsResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/posts").unwrap();
        client.get(full_url)
    }
}
