use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/session", get(handlers::get_session))
        .route("/api/reload", post(handlers::reload))
        .route("/api/day", post(handlers::shift_day))
        .route("/api/goals", post(handlers::add_goal))
        .route("/api/goals/toggle", post(handlers::toggle_goal))
        .route("/api/goals/delete", post(handlers::delete_goal))
        .with_state(state)
}
