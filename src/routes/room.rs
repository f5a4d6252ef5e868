use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::status_for;
use crate::models::rule::Rule;
use crate::{services::room_service, state::AppState, utils::websocket};

/// 参加者の識別情報。idはクライアント側で払い出される
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub rule: Rule,
    pub host: UserRequest,
}

#[derive(Debug, Deserialize)]
pub struct JoinRoomRequest {
    pub user: UserRequest,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        // ルーム作成
        // curl -X POST http://localhost:8080/api/room/create -H 'Content-Type: application/json' -d '{"name":"村","rule":{...},"host":{"id":"u1","name":"host"}}'
        .route("/create", post(create_room))
        // ルーム一覧取得
        // curl http://localhost:8080/api/room/rooms
        .route("/rooms", get(get_rooms))
        // 特定のルーム情報取得
        // curl http://localhost:8080/api/room/{roomid}
        .route("/:roomid", get(get_room_info))
        // ルーム参加
        // curl -X POST http://localhost:8080/api/room/{roomid}/join -H 'Content-Type: application/json' -d '{"user":{"id":"u2","name":"guest"}}'
        .route("/:roomid/join", post(join_room))
        // ルーム脱退
        // curl -X POST http://localhost:8080/api/room/{roomid}/leave/{userid}
        .route("/:roomid/leave/:userid", post(leave_room))
        // WebSocket接続
        // websocat ws://localhost:8080/api/room/{roomid}/ws
        .route("/:roomid/ws", get(websocket::handler))
        .with_state(state)
}

async fn create_room(
    State(state): State<AppState>,
    Json(req): Json<CreateRoomRequest>,
) -> Response {
    match room_service::create_room(state, req.name, req.rule, req.host.id, req.host.name).await {
        Ok(broadcast) => (StatusCode::OK, Json(broadcast)).into_response(),
        Err(e) => (status_for(&e), Json(e.to_string())).into_response(),
    }
}

async fn get_rooms(State(state): State<AppState>) -> Response {
    match room_service::list_rooms(&state).await {
        Ok(rooms) => (StatusCode::OK, Json(rooms)).into_response(),
        Err(e) => (status_for(&e), Json(e.to_string())).into_response(),
    }
}

async fn get_room_info(State(state): State<AppState>, Path(room_id): Path<String>) -> Response {
    match room_service::get_room(&state, &room_id).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => (status_for(&e), Json(e.to_string())).into_response(),
    }
}

async fn join_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(req): Json<JoinRoomRequest>,
) -> Response {
    match room_service::join_room(state, &room_id, req.user.id, req.user.name).await {
        Ok(broadcast) => (StatusCode::OK, Json(broadcast)).into_response(),
        Err(e) => (status_for(&e), Json(e.to_string())).into_response(),
    }
}

async fn leave_room(
    State(state): State<AppState>,
    Path((room_id, user_id)): Path<(String, String)>,
) -> Response {
    match room_service::leave_room(state, &room_id, &user_id).await {
        Ok(broadcast) => (StatusCode::OK, Json(broadcast)).into_response(),
        Err(e) => (status_for(&e), Json(e.to_string())).into_response(),
    }
}
