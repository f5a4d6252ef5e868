use crate::models::user::User;

/// 生存メンバー全員の準備が揃ったかどうか。
/// 生存者がいないルームは揃ったとみなす（その後の勝敗判定で決着する）
pub fn is_complete(members: &[User]) -> bool {
    members
        .iter()
        .filter(|user| user.is_alive)
        .all(|user| user.is_awaiting)
}

/// 生死を問わず全メンバーの準備フラグを下ろす
pub fn reset(members: &mut [User]) {
    for user in members.iter_mut() {
        user.is_awaiting = false;
    }
}
