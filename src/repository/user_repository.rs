use std::str::FromStr;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use super::RepositoryError;
use crate::models::role::Role;
use crate::models::user::User;
use crate::store::TtlStore;

/// Userの永続化表現。役職は文字列で保持する
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub is_host: bool,
    pub role: Option<String>,
    pub is_alive: bool,
    pub vote_count: u32,
    pub is_awaiting: bool,
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        UserRecord {
            id: user.id.clone(),
            name: user.name.clone(),
            is_host: user.is_host,
            role: user.role.map(|role| role.as_str().to_string()),
            is_alive: user.is_alive,
            vote_count: user.vote_count,
            is_awaiting: user.is_awaiting,
        }
    }
}

impl UserRecord {
    fn into_user(self) -> Result<User, RepositoryError> {
        let role = match self.role {
            Some(value) => Some(Role::from_str(&value)?),
            None => None,
        };
        Ok(User {
            id: self.id,
            name: self.name,
            is_host: self.is_host,
            role,
            is_alive: self.is_alive,
            vote_count: self.vote_count,
            is_awaiting: self.is_awaiting,
        })
    }
}

#[derive(Clone)]
pub struct UserRepository {
    store: TtlStore<UserRecord>,
}

impl UserRepository {
    pub fn new(ttl: Duration) -> Self {
        UserRepository {
            store: TtlStore::new(ttl),
        }
    }

    /// 期限切れはNotFound扱い（正常系）
    pub async fn get(&self, id: &str) -> Result<Option<User>, RepositoryError> {
        match self.store.get(id).await {
            Some(record) => Ok(Some(record.into_user()?)),
            None => Ok(None),
        }
    }

    /// 全上書き。書き込むたびに有効期限が巻き直される
    pub async fn put(&self, user: &User) {
        self.store.put(&user.id, UserRecord::from(user)).await;
    }

    /// メンバー一覧を参加順のまま取得する。
    /// 期限切れで見つからないidはログを残して読み飛ばす
    pub async fn get_many(&self, ids: &[String]) -> Result<Vec<User>, RepositoryError> {
        let mut users = Vec::with_capacity(ids.len());
        for id in ids {
            match self.get(id).await? {
                Some(user) => users.push(user),
                None => warn!("ユーザー {} が見つかりません。読み飛ばします", id),
            }
        }
        Ok(users)
    }
}
