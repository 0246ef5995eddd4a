use crate::errors::AppError;
use crate::models::{AddGoalRequest, DeleteGoalRequest, ShiftDayRequest, ToggleGoalRequest};
use crate::progress::SessionView;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = state.session.view().await;
    Html(render_index(&view))
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.session.view().await)
}

pub async fn reload(State(state): State<AppState>) -> Json<SessionView> {
    state.session.load_goals().await;
    Json(state.session.view().await)
}

pub async fn shift_day(
    State(state): State<AppState>,
    Json(payload): Json<ShiftDayRequest>,
) -> Json<SessionView> {
    state.session.shift_day(payload.delta).await;
    Json(state.session.view().await)
}

pub async fn add_goal(
    State(state): State<AppState>,
    Json(payload): Json<AddGoalRequest>,
) -> Result<Json<SessionView>, AppError> {
    let view = state.session.submit_goal(&payload.title).await?;
    Ok(Json(view))
}

pub async fn toggle_goal(
    State(state): State<AppState>,
    Json(payload): Json<ToggleGoalRequest>,
) -> Result<Json<SessionView>, AppError> {
    state
        .session
        .toggle_goal(payload.key, payload.completed)
        .await?;
    Ok(Json(state.session.view().await))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Json(payload): Json<DeleteGoalRequest>,
) -> Result<Json<SessionView>, AppError> {
    let confirmed = payload.confirmed;
    state
        .session
        .delete_goal(payload.key, |_| confirmed)
        .await?;
    Ok(Json(state.session.view().await))
}
