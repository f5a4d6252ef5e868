pub mod room_repository;
pub mod user_repository;

use crate::models::DecodeError;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// 保存されていた値が既知の表現に復元できなかった
    #[error("保存データの復元に失敗しました: {0}")]
    InvalidData(#[from] DecodeError),
}
