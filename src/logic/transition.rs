use super::judge;
use super::tally::{self, LynchOutcome};
use crate::models::phase::Phase;
use crate::models::role::Faction;
use crate::models::room::Room;
use crate::models::user::User;

/// バリア通過時のフェーズ遷移。roomとメンバーを次の状態へ書き換え、
/// 勝敗が決した場合は勝利陣営を返す（その場合roomは進行中でなくなる）。
///
/// 日数は開始時と夜明けに進み、決選投票の巻き戻しでは進まない。
/// 元の挙動をそのまま引き継いだ非対称で、均してはいけない
pub fn on_barrier_complete(room: &mut Room, members: &mut [User]) -> Option<Faction> {
    match room.phase {
        Phase::Start => {
            room.days += 1;
            room.phase = Phase::Discussion;
            None
        }
        Phase::Discussion => {
            room.last_lynched = None;
            room.last_murdered = None;
            room.phase = Phase::Voting;
            None
        }
        Phase::Voting => {
            match tally::resolve_lynch(room.is_final_voting, members) {
                LynchOutcome::Lynched(target_id) => {
                    kill(members, &target_id);
                    room.last_lynched = Some(target_id);
                    room.is_final_voting = false;
                }
                LynchOutcome::FinalVote => room.is_final_voting = true,
                LynchOutcome::NoLynch => room.is_final_voting = false,
            }
            tally::reset_votes(members);
            room.phase = Phase::VotingResult;
            None
        }
        Phase::VotingResult => {
            if room.is_final_voting {
                // 決選投票へ巻き戻す。日数は進めない
                room.phase = Phase::Discussion;
                None
            } else if let Some(winner) = judge::judge(members) {
                room.in_progress = false;
                Some(winner)
            } else {
                room.phase = Phase::Night;
                None
            }
        }
        Phase::Night => {
            if let Some(target_id) = tally::resolve_attack(members, room.last_hunted.as_deref()) {
                kill(members, &target_id);
                room.last_murdered = Some(target_id);
            }
            tally::reset_votes(members);
            if let Some(winner) = judge::judge(members) {
                room.in_progress = false;
                Some(winner)
            } else {
                room.days += 1;
                room.last_hunted = None;
                room.phase = Phase::Discussion;
                None
            }
        }
    }
}

fn kill(members: &mut [User], target_id: &str) {
    if let Some(target) = members.iter_mut().find(|user| user.id == target_id) {
        target.is_alive = false;
    }
}
