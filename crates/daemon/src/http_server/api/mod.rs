use axum::Router;

pub mod auth;
pub mod client;
pub mod v0;
pub mod validate;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .nest("/v0", v0::router(state.clone()))
        .with_state(state)
}
