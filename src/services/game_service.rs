use log::{debug, info, warn};
use rand::thread_rng;

use super::ServiceError;
use crate::logic::{assign, barrier, transition};
use crate::models::event::{Broadcast, BroadcastKind};
use crate::models::phase::Phase;
use crate::state::AppState;

/// 役職を配ってゲームを開始する。配り直しはできない
pub async fn start_game(state: AppState, room_id: &str) -> Result<Broadcast, ServiceError> {
    let lock = state.room_lock(room_id).await;
    let _guard = lock.lock().await;

    let mut room = state
        .rooms
        .get(room_id)
        .await?
        .ok_or_else(|| ServiceError::RoomNotFound(room_id.to_string()))?;
    if room.in_progress {
        return Err(ServiceError::AlreadyInProgress(room_id.to_string()));
    }

    let mut members = state.users.get_many(&room.user_ids).await?;
    assign::deal_roles(&room.rule, &mut members, &mut thread_rng());
    for member in &members {
        state.users.put(member).await;
    }

    room.in_progress = true;
    room.days += 1;
    state.rooms.put(&room).await;
    info!("ルーム {} でゲームを開始しました（{}人）", room.id, members.len());

    let broadcast = Broadcast::new(BroadcastKind::RolesAssigned, room, members);
    state.broadcast(room_id, &broadcast).await;
    Ok(broadcast)
}

/// 昼の処刑投票。投票者の生死や重複は検証しない
pub async fn cast_vote(
    state: AppState,
    room_id: &str,
    target_id: &str,
) -> Result<Broadcast, ServiceError> {
    debug!("投票: room={} target={}", room_id, target_id);
    record_vote(&state, room_id, target_id).await
}

/// 夜の襲撃先の指定。集計は昼の投票と同じ仕組みに乗る
pub async fn cast_attack(
    state: AppState,
    room_id: &str,
    target_id: &str,
) -> Result<Broadcast, ServiceError> {
    debug!("襲撃先の指定: room={} target={}", room_id, target_id);
    record_vote(&state, room_id, target_id).await
}

async fn record_vote(
    state: &AppState,
    room_id: &str,
    target_id: &str,
) -> Result<Broadcast, ServiceError> {
    let room = state
        .rooms
        .get(room_id)
        .await?
        .ok_or_else(|| ServiceError::RoomNotFound(room_id.to_string()))?;
    let mut target = state
        .users
        .get(target_id)
        .await?
        .ok_or_else(|| ServiceError::UserNotFound(target_id.to_string()))?;

    target.vote_count += 1;
    state.users.put(&target).await;

    let members = state.users.get_many(&room.user_ids).await?;
    let broadcast = Broadcast::new(BroadcastKind::RoomUpdated, room, members);
    state.broadcast(room_id, &broadcast).await;
    Ok(broadcast)
}

/// 今夜の護衛対象を指定する。夜明けに解除される
pub async fn designate_protected(
    state: AppState,
    room_id: &str,
    target_id: &str,
) -> Result<Broadcast, ServiceError> {
    let mut room = state
        .rooms
        .get(room_id)
        .await?
        .ok_or_else(|| ServiceError::RoomNotFound(room_id.to_string()))?;

    room.last_hunted = Some(target_id.to_string());
    state.rooms.put(&room).await;
    debug!("護衛対象の指定: room={} target={}", room_id, target_id);

    let members = state.users.get_many(&room.user_ids).await?;
    let broadcast = Broadcast::new(BroadcastKind::RoomUpdated, room, members);
    state.broadcast(room_id, &broadcast).await;
    Ok(broadcast)
}

/// 準備完了シグナル。ルーム単位のロックの下でバリアを評価し、
/// 最後の1人を書き込んだハンドラだけがフェーズを進める。
/// 進行開始後に届いた同じフェーズ宛ての遅延シグナルはフェーズ不一致で
/// 捨てられ、次のバリアには数えない
pub async fn handle_ready(
    state: AppState,
    room_id: &str,
    user_id: &str,
    phase: Phase,
) -> Result<Broadcast, ServiceError> {
    let lock = state.room_lock(room_id).await;
    let _guard = lock.lock().await;

    let mut room = state
        .rooms
        .get(room_id)
        .await?
        .ok_or_else(|| ServiceError::RoomNotFound(room_id.to_string()))?;
    if !room.in_progress {
        warn!("進行中でないルームへの準備シグナルを無視します: room={}", room_id);
        return Err(ServiceError::NotInProgress(room_id.to_string()));
    }
    if room.phase != phase {
        warn!(
            "フェーズ不一致の準備シグナルを無視します: room={} 現在={} 要求={}",
            room_id, room.phase, phase
        );
        return Err(ServiceError::InvalidPhase {
            current: room.phase,
            requested: phase,
        });
    }

    let mut user = state
        .users
        .get(user_id)
        .await?
        .ok_or_else(|| ServiceError::UserNotFound(user_id.to_string()))?;
    user.is_awaiting = true;
    state.users.put(&user).await;

    // バリアは書き込みが終わってから評価する
    let mut members = state.users.get_many(&room.user_ids).await?;
    if !barrier::is_complete(&members) {
        debug!("ルーム {} のバリア待ち: {} が準備完了", room_id, user_id);
        let broadcast = Broadcast::new(BroadcastKind::RoomUpdated, room, members);
        state.broadcast(room_id, &broadcast).await;
        return Ok(broadcast);
    }

    // 全員揃った。フラグを戻してからフェーズを進める
    barrier::reset(&mut members);
    let from = room.phase;
    let winner = transition::on_barrier_complete(&mut room, &mut members);
    for member in &members {
        state.users.put(member).await;
    }
    state.rooms.put(&room).await;

    let broadcast = match winner {
        Some(faction) => {
            info!("ルーム {} のゲームが終了しました: {}の勝利", room.id, faction);
            Broadcast::game_over(room, members, faction)
        }
        None => {
            info!("ルーム {} のフェーズを進めました: {} -> {}", room.id, from, room.phase);
            Broadcast::new(BroadcastKind::PhaseChanged, room, members)
        }
    };
    state.broadcast(room_id, &broadcast).await;
    Ok(broadcast)
}
