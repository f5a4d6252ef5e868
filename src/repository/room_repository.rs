use std::str::FromStr;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use super::RepositoryError;
use crate::models::phase::Phase;
use crate::models::room::Room;
use crate::models::rule::Rule;
use crate::store::TtlStore;

/// Roomの永続化表現。メンバー一覧とルールは同じidの別レコードとして持つ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: String,
    pub name: String,
    pub in_progress: bool,
    pub days: u32,
    pub phase: String,
    pub is_final_voting: bool,
    pub last_lynched: Option<String>,
    pub last_murdered: Option<String>,
    pub last_hunted: Option<String>,
}

impl From<&Room> for RoomRecord {
    fn from(room: &Room) -> Self {
        RoomRecord {
            id: room.id.clone(),
            name: room.name.clone(),
            in_progress: room.in_progress,
            days: room.days,
            phase: room.phase.as_str().to_string(),
            is_final_voting: room.is_final_voting,
            last_lynched: room.last_lynched.clone(),
            last_murdered: room.last_murdered.clone(),
            last_hunted: room.last_hunted.clone(),
        }
    }
}

#[derive(Clone)]
pub struct RoomRepository {
    rooms: TtlStore<RoomRecord>,
    members: TtlStore<Vec<String>>,
    rules: TtlStore<Rule>,
}

impl RoomRepository {
    pub fn new(ttl: Duration) -> Self {
        RoomRepository {
            rooms: TtlStore::new(ttl),
            members: TtlStore::new(ttl),
            rules: TtlStore::new(ttl),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<Room>, RepositoryError> {
        match self.rooms.get(id).await {
            Some(record) => self.join(record).await,
            None => Ok(None),
        }
    }

    /// 3レコードをまとめて書き込む。期限も揃って巻き直される
    pub async fn put(&self, room: &Room) {
        self.rooms.put(&room.id, RoomRecord::from(room)).await;
        self.members.put(&room.id, room.user_ids.clone()).await;
        self.rules.put(&room.id, room.rule.clone()).await;
    }

    pub async fn list_all(&self) -> Result<Vec<Room>, RepositoryError> {
        let mut rooms = Vec::new();
        for (_, record) in self.rooms.list_all().await {
            if let Some(room) = self.join(record).await? {
                rooms.push(room);
            }
        }
        Ok(rooms)
    }

    /// 付随レコードをidで引き当てる。欠けているルームは壊れた実体を
    /// 作らず、ログを残して読み飛ばす
    async fn join(&self, record: RoomRecord) -> Result<Option<Room>, RepositoryError> {
        let user_ids = match self.members.get(&record.id).await {
            Some(ids) => ids,
            None => {
                warn!("ルーム {} のメンバー一覧がありません。読み飛ばします", record.id);
                return Ok(None);
            }
        };
        let rule = match self.rules.get(&record.id).await {
            Some(rule) => rule,
            None => {
                warn!("ルーム {} のルールがありません。読み飛ばします", record.id);
                return Ok(None);
            }
        };
        let phase = Phase::from_str(&record.phase)?;
        Ok(Some(Room {
            id: record.id,
            name: record.name,
            rule,
            user_ids,
            in_progress: record.in_progress,
            days: record.days,
            phase,
            is_final_voting: record.is_final_voting,
            last_lynched: record.last_lynched,
            last_murdered: record.last_murdered,
            last_hunted: record.last_hunted,
        }))
    }
}
