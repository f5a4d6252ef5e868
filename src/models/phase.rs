use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DecodeError;

/// ルームの進行フェーズ。初回以降は
/// Discussion → Voting → VotingResult → {Discussion | Night} → Discussion …
/// と勝敗が決まるまで巡回する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Start,
    Discussion,
    Voting,
    VotingResult,
    Night,
}

impl Phase {
    /// 永続化に使う表現
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Discussion => "discussion",
            Phase::Voting => "voting",
            Phase::VotingResult => "voting_result",
            Phase::Night => "night",
        }
    }
}

impl FromStr for Phase {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Phase::Start),
            "discussion" => Ok(Phase::Discussion),
            "voting" => Ok(Phase::Voting),
            "voting_result" => Ok(Phase::VotingResult),
            "night" => Ok(Phase::Night),
            other => Err(DecodeError {
                kind: "フェーズ",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Start => write!(f, "開始"),
            Phase::Discussion => write!(f, "議論"),
            Phase::Voting => write!(f, "投票"),
            Phase::VotingResult => write!(f, "投票結果"),
            Phase::Night => write!(f, "夜"),
        }
    }
}
