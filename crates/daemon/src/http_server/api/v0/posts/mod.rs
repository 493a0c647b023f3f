use axum::routing::{delete, get, post, put};
use axum::Router;

pub mod add_comment;
pub mod create;
pub mod delete_post;
pub mod get;
pub mod like;
pub mod list;
pub mod remove_comment;
pub mod unlike;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .route("/", post(create::handler).get(list::handler))
        .route(
            "/:post_id",
            get(get::handler).delete(delete_post::handler),
        )
        .route("/:post_id/like", put(like::handler))
        .route("/:post_id/unlike", put(unlike::handler))
        .route("/:post_id/comments", post(add_comment::handler))
        .route(
            "/:post_id/comments/:comment_id",
            delete(remove_comment::handler),
        )
        .with_state(state)
}
