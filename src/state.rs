use axum::extract::ws::Message;
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::sync::{broadcast, Mutex};

use crate::models::event::Broadcast;
use crate::repository::room_repository::RoomRepository;
use crate::repository::user_repository::UserRepository;
use crate::utils::config::CONFIG;

#[derive(Clone)]
pub struct AppState {
    pub rooms: RoomRepository,
    pub users: UserRepository,
    pub channel: Arc<Mutex<HashMap<String, broadcast::Sender<Message>>>>,
    /// ルーム単位でバリア評価とフェーズ進行を直列化するためのロック
    advance_locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(CONFIG.entity_ttl_secs))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        AppState {
            rooms: RoomRepository::new(ttl),
            users: UserRepository::new(ttl),
            channel: Arc::new(Mutex::new(HashMap::new())),
            advance_locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn get_or_create_room_channel(&self, room_id: &str) -> broadcast::Sender<Message> {
        let mut channels = self.channel.lock().await;
        if let Some(channel) = channels.get(room_id) {
            channel.clone()
        } else {
            let (tx, _) = broadcast::channel(1000);
            channels.insert(room_id.to_string(), tx.clone());
            tx
        }
    }

    /// ルームごとのロックを取り出す。全ルームを跨ぐロックは存在しない
    pub async fn room_lock(&self, room_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.advance_locks.lock().await;
        locks
            .entry(room_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// ルームの全接続へ通知を配信する。購読者がいなくてもエラーにしない
    pub async fn broadcast(&self, room_id: &str, payload: &Broadcast) {
        let tx = self.get_or_create_room_channel(room_id).await;
        match serde_json::to_string(payload) {
            Ok(text) => {
                if tx.send(Message::Text(text)).is_err() {
                    log::debug!("ルーム {} に購読者がいません", room_id);
                }
            }
            Err(e) => log::error!("通知のシリアライズに失敗しました: {}", e),
        }
    }
}
