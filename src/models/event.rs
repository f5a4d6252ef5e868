use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::role::Faction;
use super::room::Room;
use super::user::User;

/// ルームと現在のメンバー一覧
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomView {
    pub room: Room,
    pub members: Vec<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadcastKind {
    RoomCreated,
    MembershipChanged,
    RoomUpdated,
    RolesAssigned,
    PhaseChanged,
    GameOver,
}

/// ルームの全接続へ配信する通知。更新後のルームとメンバー一覧を必ず載せる
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Broadcast {
    pub message_type: BroadcastKind,
    pub room: Room,
    pub members: Vec<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Faction>,
    pub timestamp: String,
}

impl Broadcast {
    pub fn new(message_type: BroadcastKind, room: Room, members: Vec<User>) -> Self {
        Broadcast {
            message_type,
            room,
            members,
            winner: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// 勝敗が決したときだけ、通常のフェーズ通知の代わりに送る
    pub fn game_over(room: Room, members: Vec<User>, winner: Faction) -> Self {
        Broadcast {
            message_type: BroadcastKind::GameOver,
            room,
            members,
            winner: Some(winner),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
