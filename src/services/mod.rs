pub mod game_service;
pub mod room_service;
pub mod user_service;

use crate::models::phase::Phase;
use crate::repository::RepositoryError;

/// ゲーム進行で起こりうるエラー。
/// NotFound系は対象が期限切れで消えた場合にも返る
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("ルームが見つかりませんでした: {0}")]
    RoomNotFound(String),
    #[error("ユーザーが見つかりませんでした: {0}")]
    UserNotFound(String),
    #[error("現在のフェーズでは受け付けられない操作です: 現在={current} 要求={requested}")]
    InvalidPhase { current: Phase, requested: Phase },
    #[error("ゲームが進行中ではありません: {0}")]
    NotInProgress(String),
    #[error("ゲームは既に開始されています: {0}")]
    AlreadyInProgress(String),
    #[error(transparent)]
    InvalidData(#[from] RepositoryError),
}
