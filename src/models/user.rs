use serde::{Deserialize, Serialize};

use super::role::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub is_host: bool,
    /// ゲーム開始時に割り当てられる。構成が人数に足りない場合は未割り当てのまま
    pub role: Option<Role>,
    pub is_alive: bool,
    /// 現在の投票ラウンドでの得票数。ラウンドごとに戻される
    pub vote_count: u32,
    /// 現在のフェーズの準備完了フラグ。バリア通過のたびに戻される
    pub is_awaiting: bool,
}

impl User {
    pub fn new(id: String, name: String, is_host: bool) -> Self {
        User {
            id,
            name,
            is_host,
            role: None,
            is_alive: true,
            vote_count: 0,
            is_awaiting: false,
        }
    }
}
