use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{get_participant, register_participant};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register_participant))
        .route("/:id", get(get_participant))
}
