use serde::{Deserialize, Serialize};

use super::role::Role;

/// 配布する役職の人数構成。合計が参加人数と一致するかは呼び出し側の責任
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub werewolf: usize,
    pub fortune_teller: usize,
    pub medium: usize,
    pub hunter: usize,
    pub maniac: usize,
    pub villager: usize,
}

impl Rule {
    pub fn total(&self) -> usize {
        self.werewolf + self.fortune_teller + self.medium + self.hunter + self.maniac + self.villager
    }

    /// 人数分の役職ラベルを並べた多重集合
    pub fn role_pool(&self) -> Vec<Role> {
        let counts = [
            (Role::WereWolf, self.werewolf),
            (Role::FortuneTeller, self.fortune_teller),
            (Role::Medium, self.medium),
            (Role::Hunter, self.hunter),
            (Role::Maniac, self.maniac),
            (Role::Villager, self.villager),
        ];
        counts
            .iter()
            .flat_map(|&(role, count)| std::iter::repeat(role).take(count))
            .collect()
    }
}
