use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use super::status_for;
use crate::models::phase::Phase;
use crate::{services::game_service, state::AppState};

#[derive(Debug, Deserialize)]
pub struct TargetRequest {
    pub target_id: String,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .nest(
            "/:roomid",
            Router::new()
                // 役職を配ってゲームを開始
                // curl -X POST http://localhost:8080/api/game/{roomid}/start
                .route("/start", post(start_game))
                // ゲームアクション
                .nest(
                    "/actions",
                    Router::new()
                        .route("/vote", post(cast_vote))
                        .route("/attack", post(cast_attack))
                        .route("/protect", post(designate_protected)),
                )
                // フェーズごとの準備完了シグナル
                // curl -X POST http://localhost:8080/api/game/{roomid}/ready/discussion/{userid}
                .route("/ready/start/:userid", post(ready_start))
                .route("/ready/discussion/:userid", post(ready_discussion))
                .route("/ready/voting/:userid", post(ready_voting))
                .route("/ready/voting-result/:userid", post(ready_voting_result))
                .route("/ready/night/:userid", post(ready_night)),
        )
        .with_state(state)
}

async fn start_game(State(state): State<AppState>, Path(room_id): Path<String>) -> Response {
    match game_service::start_game(state, &room_id).await {
        Ok(broadcast) => (StatusCode::OK, Json(broadcast)).into_response(),
        Err(e) => (status_for(&e), Json(e.to_string())).into_response(),
    }
}

async fn cast_vote(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(req): Json<TargetRequest>,
) -> Response {
    match game_service::cast_vote(state, &room_id, &req.target_id).await {
        Ok(broadcast) => (StatusCode::OK, Json(broadcast)).into_response(),
        Err(e) => (status_for(&e), Json(e.to_string())).into_response(),
    }
}

async fn cast_attack(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(req): Json<TargetRequest>,
) -> Response {
    match game_service::cast_attack(state, &room_id, &req.target_id).await {
        Ok(broadcast) => (StatusCode::OK, Json(broadcast)).into_response(),
        Err(e) => (status_for(&e), Json(e.to_string())).into_response(),
    }
}

async fn designate_protected(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(req): Json<TargetRequest>,
) -> Response {
    match game_service::designate_protected(state, &room_id, &req.target_id).await {
        Ok(broadcast) => (StatusCode::OK, Json(broadcast)).into_response(),
        Err(e) => (status_for(&e), Json(e.to_string())).into_response(),
    }
}

async fn ready_start(
    State(state): State<AppState>,
    Path((room_id, user_id)): Path<(String, String)>,
) -> Response {
    ready(state, room_id, user_id, Phase::Start).await
}

async fn ready_discussion(
    State(state): State<AppState>,
    Path((room_id, user_id)): Path<(String, String)>,
) -> Response {
    ready(state, room_id, user_id, Phase::Discussion).await
}

async fn ready_voting(
    State(state): State<AppState>,
    Path((room_id, user_id)): Path<(String, String)>,
) -> Response {
    ready(state, room_id, user_id, Phase::Voting).await
}

async fn ready_voting_result(
    State(state): State<AppState>,
    Path((room_id, user_id)): Path<(String, String)>,
) -> Response {
    ready(state, room_id, user_id, Phase::VotingResult).await
}

async fn ready_night(
    State(state): State<AppState>,
    Path((room_id, user_id)): Path<(String, String)>,
) -> Response {
    ready(state, room_id, user_id, Phase::Night).await
}

async fn ready(state: AppState, room_id: String, user_id: String, phase: Phase) -> Response {
    match game_service::handle_ready(state, &room_id, &user_id, phase).await {
        Ok(broadcast) => (StatusCode::OK, Json(broadcast)).into_response(),
        Err(e) => (status_for(&e), Json(e.to_string())).into_response(),
    }
}
