use axum::http::StatusCode;
use axum::Router;

use crate::services::ServiceError;
use crate::state::AppState;

mod game;
mod room;
mod user;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .nest("/api/room", room::routes(state.clone()))
        .nest("/api/game", game::routes(state.clone()))
        .nest("/api/users", user::routes(state))
}

/// サービス層のエラーをHTTPステータスへ写す
fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::RoomNotFound(_) | ServiceError::UserNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    }
}
