use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::rule::Rule;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub rule: Rule,
    /// 参加順のメンバーid一覧。重複しない
    pub user_ids: Vec<String>,
    pub in_progress: bool,
    /// 経過日数
    pub days: u32,
    pub phase: Phase,
    /// 決選投票の再投票サブラウンド中だけtrue
    pub is_final_voting: bool,
    pub last_lynched: Option<String>,
    pub last_murdered: Option<String>,
    /// 今夜の護衛対象。毎晩の明けに戻される
    pub last_hunted: Option<String>,
}

impl Room {
    pub fn new(id: String, name: String, rule: Rule) -> Self {
        Room {
            id,
            name,
            rule,
            user_ids: Vec::new(),
            in_progress: false,
            days: 0,
            phase: Phase::Start,
            is_final_voting: false,
            last_lynched: None,
            last_murdered: None,
            last_hunted: None,
        }
    }

    /// 参加順を保ったまま追加する。既に参加済みならfalse
    pub fn add_member(&mut self, user_id: &str) -> bool {
        if self.user_ids.iter().any(|id| id == user_id) {
            return false;
        }
        self.user_ids.push(user_id.to_string());
        true
    }

    /// メンバーから外す。見つからなければfalse
    pub fn remove_member(&mut self, user_id: &str) -> bool {
        let before = self.user_ids.len();
        self.user_ids.retain(|id| id != user_id);
        self.user_ids.len() != before
    }
}
