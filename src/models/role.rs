use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DecodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    WereWolf,      // 人狼
    FortuneTeller, // 占い師
    Medium,        // 霊媒師
    Hunter,        // 狩人
    Maniac,        // 狂人
    Villager,      // 村人
}

impl Role {
    /// 永続化に使う表現
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::WereWolf => "werewolf",
            Role::FortuneTeller => "fortune_teller",
            Role::Medium => "medium",
            Role::Hunter => "hunter",
            Role::Maniac => "maniac",
            Role::Villager => "villager",
        }
    }

    /// 人狼陣営かどうか。人狼以外（狂人を含む）はすべて人間側として数える
    pub fn is_wolf(&self) -> bool {
        matches!(self, Role::WereWolf)
    }
}

impl FromStr for Role {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "werewolf" => Ok(Role::WereWolf),
            "fortune_teller" => Ok(Role::FortuneTeller),
            "medium" => Ok(Role::Medium),
            "hunter" => Ok(Role::Hunter),
            "maniac" => Ok(Role::Maniac),
            "villager" => Ok(Role::Villager),
            other => Err(DecodeError {
                kind: "役職",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::WereWolf => write!(f, "人狼"),
            Role::FortuneTeller => write!(f, "占い師"),
            Role::Medium => write!(f, "霊媒師"),
            Role::Hunter => write!(f, "狩人"),
            Role::Maniac => write!(f, "狂人"),
            Role::Villager => write!(f, "村人"),
        }
    }
}

/// 勝利陣営
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    Humans,
    Wolves,
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Faction::Humans => write!(f, "人間陣営"),
            Faction::Wolves => write!(f, "人狼陣営"),
        }
    }
}
