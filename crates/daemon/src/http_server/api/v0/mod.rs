use axum::Router;

pub mod accounts;
pub mod posts;
pub mod profiles;
pub mod sessions;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .nest("/accounts", accounts::router(state.clone()))
        .nest("/sessions", sessions::router(state.clone()))
        .nest("/profiles", profiles::router(state.clone()))
        .nest("/posts", posts::router(state.clone()))
        .with_state(state)
}
