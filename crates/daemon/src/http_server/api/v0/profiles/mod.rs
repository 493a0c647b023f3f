use axum::routing::{delete, get, put};
use axum::Router;

pub mod add_education;
pub mod add_experience;
pub mod delete_profile;
pub mod get;
pub mod list;
pub mod me;
pub mod remove_education;
pub mod remove_experience;
pub mod upsert;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .route(
            "/",
            get(list::handler)
                .post(upsert::handler)
                .delete(delete_profile::handler),
        )
        .route("/me", get(me::handler))
        .route("/account/:account_id", get(get::handler))
        .route("/experience", put(add_experience::handler))
        .route("/experience/:entry_id", delete(remove_experience::handler))
        .route("/education", put(add_education::handler))
        .route("/education/:entry_id", delete(remove_education::handler))
        .with_state(state)
}
