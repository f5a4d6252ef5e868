use crate::models::role::Faction;
use crate::models::user::User;

/// 勝敗判定。生存している人狼が0なら人間陣営、
/// 人狼が人間以上なら人狼陣営、それ以外は続行
pub fn judge(members: &[User]) -> Option<Faction> {
    let wolves = members
        .iter()
        .filter(|user| user.is_alive && user.role.map_or(false, |role| role.is_wolf()))
        .count();
    let humans = members
        .iter()
        .filter(|user| user.is_alive && !user.role.map_or(false, |role| role.is_wolf()))
        .count();

    if wolves == 0 {
        Some(Faction::Humans)
    } else if wolves >= humans {
        Some(Faction::Wolves)
    } else {
        None
    }
}
