use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{get_session, get_test_overview, start_session, submit_answer};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_test_overview))
        .route("/sessions", post(start_session))
        .route("/sessions/:id", get(get_session))
        .route("/sessions/:id/answers", post(submit_answer))
}
