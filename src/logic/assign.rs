use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::rule::Rule;
use crate::models::user::User;

/// 役職の多重集合をFisher–Yatesで並べ替え、参加順に割り当てる。
/// 多重集合が人数より短い場合、余ったメンバーは未割り当てのまま残る
pub fn deal_roles<R: Rng>(rule: &Rule, members: &mut [User], rng: &mut R) {
    let mut pool = rule.role_pool();
    pool.shuffle(rng);
    for (user, role) in members.iter_mut().zip(pool) {
        user.role = Some(role);
    }
}
