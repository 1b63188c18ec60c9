use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{
    admin_login, export_results, get_participant_answers, get_summary, list_results,
};
use crate::middleware::auth::{AdminSecret, require_admin};
use crate::state::AppState;

pub fn routes(admin: AdminSecret) -> Router<AppState> {
    let protected = Router::new()
        .route("/summary", get(get_summary))
        .route("/results", get(list_results))
        .route("/results/export", get(export_results))
        .route("/participants/:id/answers", get(get_participant_answers))
        .route_layer(middleware::from_fn_with_state(admin, require_admin));

    Router::new()
        .route("/login", post(admin_login))
        .merge(protected)
}
