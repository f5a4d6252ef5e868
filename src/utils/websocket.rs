use axum::{
    extract::{
        ws::{Message, WebSocket},
        Path, State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;

/// クライアント間で中継するチャットメッセージ。サーバーには残さない
#[derive(Debug, Serialize, Deserialize)]
struct WebSocketMessage {
    message_type: String,
    player_id: String,
    player_name: String,
    content: String,
    timestamp: String,
    room_id: String,
}

pub async fn handler(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state, room_id))
}

pub async fn handle_socket(ws: WebSocket, state: AppState, room_id: String) {
    info!("New WebSocket connection established for room: {}", room_id);
    let tx = state.get_or_create_room_channel(&room_id).await;

    let (mut sender, mut receiver) = ws.split();
    let mut rx = tx.subscribe();

    let default_player_id = Uuid::new_v4().to_string();
    let room_id_for_receive = room_id.clone();

    // クライアントからのチャットをルーム全体へ中継する
    let receive_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Text(text) = msg {
                match serde_json::from_str::<WebSocketMessage>(&text) {
                    Ok(mut ws_message) => {
                        // player_idが空の場合は接続ごとのIDを使う
                        if ws_message.player_id.trim().is_empty() {
                            ws_message.player_id = default_player_id.clone();
                        }
                        ws_message.room_id = room_id_for_receive.clone();
                        ws_message.timestamp = chrono::Utc::now().to_rfc3339();

                        match serde_json::to_string(&ws_message) {
                            Ok(response) => {
                                if tx.send(Message::Text(response)).is_err() {
                                    debug!("ルーム {} に購読者がいません", room_id_for_receive);
                                }
                            }
                            Err(e) => warn!("チャットのシリアライズに失敗しました: {}", e),
                        }
                    }
                    Err(e) => {
                        warn!(
                            "不正なチャットメッセージを無視します: room={} error={}",
                            room_id_for_receive, e
                        );
                    }
                }
            }
        }
    });

    // ルームチャンネルの通知をこの接続へ流す
    let send_task = tokio::spawn(async move {
        while let Ok(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let _ = tokio::join!(receive_task, send_task);
}
