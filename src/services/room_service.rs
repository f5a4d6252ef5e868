use log::info;
use uuid::Uuid;

use super::ServiceError;
use crate::models::event::{Broadcast, BroadcastKind, RoomView};
use crate::models::room::Room;
use crate::models::rule::Rule;
use crate::models::user::User;
use crate::state::AppState;

pub async fn create_room(
    state: AppState,
    name: String,
    rule: Rule,
    host_id: String,
    host_name: String,
) -> Result<Broadcast, ServiceError> {
    let room_id = Uuid::new_v4().to_string();
    let mut room = Room::new(room_id, name, rule);
    let host = User::new(host_id, host_name, true);
    room.add_member(&host.id);

    state.users.put(&host).await;
    state.rooms.put(&room).await;
    info!("ルームを作成しました: {} (host={})", room.id, host.id);

    let room_id = room.id.clone();
    let broadcast = Broadcast::new(BroadcastKind::RoomCreated, room, vec![host]);
    state.broadcast(&room_id, &broadcast).await;
    Ok(broadcast)
}

pub async fn join_room(
    state: AppState,
    room_id: &str,
    user_id: String,
    user_name: String,
) -> Result<Broadcast, ServiceError> {
    let mut room = state
        .rooms
        .get(room_id)
        .await?
        .ok_or_else(|| ServiceError::RoomNotFound(room_id.to_string()))?;
    // 進行中のルームには参加できない
    if room.in_progress {
        return Err(ServiceError::AlreadyInProgress(room_id.to_string()));
    }

    let user = User::new(user_id, user_name, false);
    if room.add_member(&user.id) {
        state.users.put(&user).await;
        state.rooms.put(&room).await;
        info!("ルーム {} に {} が参加しました", room.id, user.id);
    }

    let members = state.users.get_many(&room.user_ids).await?;
    let broadcast = Broadcast::new(BroadcastKind::MembershipChanged, room, members);
    state.broadcast(room_id, &broadcast).await;
    Ok(broadcast)
}

pub async fn leave_room(
    state: AppState,
    room_id: &str,
    user_id: &str,
) -> Result<Broadcast, ServiceError> {
    let mut room = state
        .rooms
        .get(room_id)
        .await?
        .ok_or_else(|| ServiceError::RoomNotFound(room_id.to_string()))?;
    if !room.remove_member(user_id) {
        return Err(ServiceError::UserNotFound(user_id.to_string()));
    }

    // ユーザーレコード自体は消さない。期限切れで自然に消える
    state.rooms.put(&room).await;
    info!("ルーム {} から {} が脱退しました", room.id, user_id);

    let members = state.users.get_many(&room.user_ids).await?;
    let broadcast = Broadcast::new(BroadcastKind::MembershipChanged, room, members);
    state.broadcast(room_id, &broadcast).await;
    Ok(broadcast)
}

pub async fn get_room(state: &AppState, room_id: &str) -> Result<RoomView, ServiceError> {
    let room = state
        .rooms
        .get(room_id)
        .await?
        .ok_or_else(|| ServiceError::RoomNotFound(room_id.to_string()))?;
    let members = state.users.get_many(&room.user_ids).await?;
    Ok(RoomView { room, members })
}

pub async fn list_rooms(state: &AppState) -> Result<Vec<Room>, ServiceError> {
    Ok(state.rooms.list_all().await?)
}
