pub mod event;
pub mod phase;
pub mod role;
pub mod room;
pub mod rule;
pub mod user;

/// 保存されていた文字列が既知の値に復元できなかった
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("未知の{kind}です: {value}")]
pub struct DecodeError {
    pub kind: &'static str,
    pub value: String,
}
