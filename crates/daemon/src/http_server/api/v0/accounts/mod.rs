use axum::routing::{get, post};
use axum::Router;

pub mod me;
pub mod register;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .route("/", post(register::handler))
        .route("/me", get(me::handler))
        .with_state(state)
}
