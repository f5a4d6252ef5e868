use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::status_for;
use crate::{services::user_service, state::AppState};

pub fn routes(state: AppState) -> Router {
    Router::new()
        // ユーザー情報取得
        // curl http://localhost:8080/api/users/{userid}
        .route("/:userid", get(get_user))
        .with_state(state)
}

async fn get_user(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    match user_service::get_user(&state, &user_id).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => (status_for(&e), Json(e.to_string())).into_response(),
    }
}
