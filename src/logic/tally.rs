use crate::models::user::User;

/// 最多得票のメンバーid一覧。生死を問わず全メンバーを数える
pub fn leaders(members: &[User]) -> Vec<String> {
    let max = match members.iter().map(|user| user.vote_count).max() {
        Some(max) => max,
        None => return Vec::new(),
    };
    members
        .iter()
        .filter(|user| user.vote_count == max)
        .map(|user| user.id.clone())
        .collect()
}

/// 昼の処刑投票の決着
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LynchOutcome {
    /// 唯一の最多得票者が処刑される
    Lynched(String),
    /// 同数のため決選投票へ
    FinalVote,
    /// 決選投票でも同数。誰も処刑されない
    NoLynch,
}

pub fn resolve_lynch(is_final_voting: bool, members: &[User]) -> LynchOutcome {
    let mut leaders = leaders(members);
    match leaders.len() {
        0 => LynchOutcome::NoLynch,
        1 => LynchOutcome::Lynched(leaders.remove(0)),
        _ if is_final_voting => LynchOutcome::NoLynch,
        _ => LynchOutcome::FinalVote,
    }
}

/// 夜の襲撃の決着。同数なら失敗し、護衛対象なら何も起きない。
/// 昼と違って決選投票は行わない
pub fn resolve_attack(members: &[User], protected: Option<&str>) -> Option<String> {
    let mut leaders = leaders(members);
    if leaders.len() != 1 {
        return None;
    }
    let target = leaders.remove(0);
    if protected == Some(target.as_str()) {
        None
    } else {
        Some(target)
    }
}

/// 投票ラウンドの終了時に全メンバーの得票を戻す
pub fn reset_votes(members: &mut [User]) {
    for user in members.iter_mut() {
        user.vote_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, vote_count: u32) -> User {
        let mut user = User::new(id.to_string(), format!("プレイヤー{}", id), false);
        user.vote_count = vote_count;
        user
    }

    #[test]
    fn test_unique_leader() {
        let members = vec![member("1", 0), member("2", 3), member("3", 1)];
        assert_eq!(leaders(&members), vec!["2".to_string()]);
    }

    #[test]
    fn test_tied_leaders_are_all_returned() {
        let members = vec![member("1", 2), member("2", 2), member("3", 1)];
        assert_eq!(leaders(&members), vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_empty_room_has_no_leaders() {
        assert!(leaders(&[]).is_empty());
    }

    #[test]
    fn test_dead_members_still_count_in_the_tally() {
        // 死亡者の得票も最大値の計算に含める
        let mut dead = member("1", 3);
        dead.is_alive = false;
        let members = vec![dead, member("2", 1)];
        assert_eq!(leaders(&members), vec!["1".to_string()]);
    }

    #[test]
    fn test_first_tie_goes_to_final_vote() {
        let members = vec![member("1", 2), member("2", 2)];
        assert_eq!(resolve_lynch(false, &members), LynchOutcome::FinalVote);
    }

    #[test]
    fn test_second_tie_lynches_no_one() {
        let members = vec![member("1", 2), member("2", 2)];
        assert_eq!(resolve_lynch(true, &members), LynchOutcome::NoLynch);
    }

    #[test]
    fn test_unique_leader_is_lynched_even_in_final_vote() {
        let members = vec![member("1", 2), member("2", 1)];
        assert_eq!(
            resolve_lynch(true, &members),
            LynchOutcome::Lynched("1".to_string())
        );
    }

    #[test]
    fn test_attack_fails_on_tie() {
        let members = vec![member("1", 1), member("2", 1)];
        assert_eq!(resolve_attack(&members, None), None);
    }

    #[test]
    fn test_attack_on_protected_target_fails() {
        let members = vec![member("1", 3), member("2", 0)];
        assert_eq!(resolve_attack(&members, Some("1")), None);
        assert_eq!(resolve_attack(&members, Some("2")), Some("1".to_string()));
    }

    #[test]
    fn test_reset_votes_clears_every_member() {
        let mut members = vec![member("1", 2), member("2", 1)];
        reset_votes(&mut members);
        assert!(members.iter().all(|user| user.vote_count == 0));
    }
}
