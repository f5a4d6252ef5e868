use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// 期限付きのキーバリューストア。書き込みのたびに期限が巻き直され、
/// 期限切れは「存在しない」と同じ扱いになる
#[derive(Debug, Clone)]
pub struct TtlStore<T> {
    entries: Arc<Mutex<HashMap<String, Entry<T>>>>,
    ttl: Duration,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    expires_at: Instant,
}

impl<T: Clone> TtlStore<T> {
    pub fn new(ttl: Duration) -> Self {
        TtlStore {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn get(&self, id: &str) -> Option<T> {
        let entries = self.entries.lock().await;
        entries
            .get(id)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.value.clone())
    }

    /// upsert。既存エントリの期限も巻き直す
    pub async fn put(&self, id: &str, value: T) {
        let mut entries = self.entries.lock().await;
        entries.insert(
            id.to_string(),
            Entry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// 全件取得。順序は保証しない。期限切れのエントリはここで掃除する
    pub async fn list_all(&self) -> Vec<(String, T)> {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();
        entries.retain(|_, entry| entry.expires_at > now);
        entries
            .iter()
            .map(|(id, entry)| (id.clone(), entry.value.clone()))
            .collect()
    }
}
