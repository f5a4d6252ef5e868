use werewolf_server::models::event::{Broadcast, BroadcastKind};
use werewolf_server::models::phase::Phase;
use werewolf_server::models::role::{Faction, Role};
use werewolf_server::models::rule::Rule;
use werewolf_server::services::{game_service, room_service, ServiceError};
use werewolf_server::state::AppState;

/// テスト用のルームを作り、指定人数のプレイヤーを参加させる
async fn setup_room(state: &AppState, player_count: usize) -> String {
    let rule = Rule {
        werewolf: 1,
        fortune_teller: 0,
        medium: 0,
        hunter: 0,
        maniac: 0,
        villager: player_count - 1,
    };
    let created = room_service::create_room(
        state.clone(),
        "テスト村".to_string(),
        rule,
        "u0".to_string(),
        "プレイヤー0".to_string(),
    )
    .await
    .unwrap();
    let room_id = created.room.id.clone();

    for i in 1..player_count {
        room_service::join_room(
            state.clone(),
            &room_id,
            format!("u{}", i),
            format!("プレイヤー{}", i),
        )
        .await
        .unwrap();
    }
    room_id
}

/// 生存メンバー全員分の準備完了シグナルを順に送り、最後の応答を返す
async fn ready_all_living(state: &AppState, room_id: &str, phase: Phase) -> Broadcast {
    let view = room_service::get_room(state, room_id).await.unwrap();
    let living: Vec<String> = view
        .members
        .iter()
        .filter(|user| user.is_alive)
        .map(|user| user.id.clone())
        .collect();
    assert!(!living.is_empty());

    let mut last = None;
    for user_id in &living {
        last = Some(
            game_service::handle_ready(state.clone(), room_id, user_id, phase)
                .await
                .unwrap(),
        );
    }
    last.unwrap()
}

#[tokio::test]
async fn test_full_game_until_wolves_win() {
    let state = AppState::new();
    let room_id = setup_room(&state, 5).await;

    // 役職を配ってゲーム開始
    let started = game_service::start_game(state.clone(), &room_id)
        .await
        .unwrap();
    assert!(started.room.in_progress);
    assert_eq!(started.room.days, 1);

    let wolf = started
        .members
        .iter()
        .find(|u| u.role == Some(Role::WereWolf))
        .unwrap()
        .id
        .clone();
    let villagers: Vec<String> = started
        .members
        .iter()
        .filter(|u| u.role == Some(Role::Villager))
        .map(|u| u.id.clone())
        .collect();
    assert_eq!(villagers.len(), 4);

    // 開始 → 議論。日数がもう1日進む
    let b = ready_all_living(&state, &room_id, Phase::Start).await;
    assert_eq!(b.room.phase, Phase::Discussion);
    assert_eq!(b.room.days, 2);

    // 議論 → 投票
    let b = ready_all_living(&state, &room_id, Phase::Discussion).await;
    assert_eq!(b.room.phase, Phase::Voting);

    // 全員が同じ村人に投票 → 一意の最多得票者が処刑される
    for _ in 0..5 {
        game_service::cast_vote(state.clone(), &room_id, &villagers[0])
            .await
            .unwrap();
    }
    let b = ready_all_living(&state, &room_id, Phase::Voting).await;
    assert_eq!(b.room.phase, Phase::VotingResult);
    assert_eq!(b.room.last_lynched, Some(villagers[0].clone()));
    let lynched = b.members.iter().find(|u| u.id == villagers[0]).unwrap();
    assert!(!lynched.is_alive);
    assert!(b.members.iter().all(|u| u.vote_count == 0));

    // 人狼1対人間3なので続行 → 夜へ
    let b = ready_all_living(&state, &room_id, Phase::VotingResult).await;
    assert_eq!(b.room.phase, Phase::Night);
    assert!(b.winner.is_none());

    // 人狼が村人を襲撃（護衛なし）→ 夜明けで日数が進む
    game_service::cast_attack(state.clone(), &room_id, &villagers[1])
        .await
        .unwrap();
    let b = ready_all_living(&state, &room_id, Phase::Night).await;
    assert_eq!(b.room.phase, Phase::Discussion);
    assert_eq!(b.room.last_murdered, Some(villagers[1].clone()));
    assert_eq!(b.room.days, 3);

    // 2日目の昼: さらに1人処刑 → 人狼1対人間1
    let b = ready_all_living(&state, &room_id, Phase::Discussion).await;
    assert_eq!(b.room.phase, Phase::Voting);
    assert_eq!(b.room.last_lynched, None);
    for _ in 0..3 {
        game_service::cast_vote(state.clone(), &room_id, &villagers[2])
            .await
            .unwrap();
    }
    let b = ready_all_living(&state, &room_id, Phase::Voting).await;
    assert_eq!(b.room.last_lynched, Some(villagers[2].clone()));

    // 勝敗判定: 人狼陣営の勝利で終局
    let b = ready_all_living(&state, &room_id, Phase::VotingResult).await;
    assert_eq!(b.message_type, BroadcastKind::GameOver);
    assert_eq!(b.winner, Some(Faction::Wolves));
    assert!(!b.room.in_progress);
    assert!(b
        .members
        .iter()
        .find(|u| u.id == wolf)
        .unwrap()
        .is_alive);
}

#[tokio::test]
async fn test_tied_day_vote_triggers_final_voting_round() {
    let state = AppState::new();
    let room_id = setup_room(&state, 4).await;
    game_service::start_game(state.clone(), &room_id)
        .await
        .unwrap();

    ready_all_living(&state, &room_id, Phase::Start).await;
    ready_all_living(&state, &room_id, Phase::Discussion).await;

    // u0とu1が同数の最多得票
    for target in ["u0", "u1", "u0", "u1"] {
        game_service::cast_vote(state.clone(), &room_id, target)
            .await
            .unwrap();
    }

    // 1回目の同数: 決選投票モードに入り、誰も処刑されない
    let b = ready_all_living(&state, &room_id, Phase::Voting).await;
    assert_eq!(b.room.phase, Phase::VotingResult);
    assert!(b.room.is_final_voting);
    assert_eq!(b.room.last_lynched, None);
    assert!(b.members.iter().all(|u| u.vote_count == 0));

    // 投票結果 → 議論へ巻き戻る。日数は進まない
    let days_before = b.room.days;
    let b = ready_all_living(&state, &room_id, Phase::VotingResult).await;
    assert_eq!(b.room.phase, Phase::Discussion);
    assert_eq!(b.room.days, days_before);

    ready_all_living(&state, &room_id, Phase::Discussion).await;

    // 2回目も同数: 決選投票モードが解除され、処刑は見送り
    for target in ["u0", "u1", "u0", "u1"] {
        game_service::cast_vote(state.clone(), &room_id, target)
            .await
            .unwrap();
    }
    let b = ready_all_living(&state, &room_id, Phase::Voting).await;
    assert!(!b.room.is_final_voting);
    assert_eq!(b.room.last_lynched, None);
    assert!(b.members.iter().all(|u| u.is_alive));

    // 今度は夜へ進む
    let b = ready_all_living(&state, &room_id, Phase::VotingResult).await;
    assert_eq!(b.room.phase, Phase::Night);
}

#[tokio::test]
async fn test_protected_villager_survives_the_attack() {
    let state = AppState::new();
    let room_id = setup_room(&state, 5).await;
    let started = game_service::start_game(state.clone(), &room_id)
        .await
        .unwrap();
    let villagers: Vec<String> = started
        .members
        .iter()
        .filter(|u| u.role == Some(Role::Villager))
        .map(|u| u.id.clone())
        .collect();

    ready_all_living(&state, &room_id, Phase::Start).await;
    ready_all_living(&state, &room_id, Phase::Discussion).await;
    for _ in 0..5 {
        game_service::cast_vote(state.clone(), &room_id, &villagers[0])
            .await
            .unwrap();
    }
    ready_all_living(&state, &room_id, Phase::Voting).await;
    let b = ready_all_living(&state, &room_id, Phase::VotingResult).await;
    assert_eq!(b.room.phase, Phase::Night);

    // 護衛された村人への襲撃は静かに失敗する
    game_service::designate_protected(state.clone(), &room_id, &villagers[1])
        .await
        .unwrap();
    game_service::cast_attack(state.clone(), &room_id, &villagers[1])
        .await
        .unwrap();
    let b = ready_all_living(&state, &room_id, Phase::Night).await;
    assert_eq!(b.room.last_murdered, None);
    assert!(b
        .members
        .iter()
        .find(|u| u.id == villagers[1])
        .unwrap()
        .is_alive);
    // 護衛はその晩限りで解除される
    assert_eq!(b.room.last_hunted, None);
    assert_eq!(b.room.phase, Phase::Discussion);
}

#[tokio::test]
async fn test_concurrent_ready_signals_advance_exactly_once() {
    let state = AppState::new();
    let room_id = setup_room(&state, 5).await;
    game_service::start_game(state.clone(), &room_id)
        .await
        .unwrap();

    // 5人分のシグナルを同時に投げても、フェーズはちょうど1段しか進まない
    let handles: Vec<_> = (0..5)
        .map(|i| {
            let state = state.clone();
            let room_id = room_id.clone();
            tokio::spawn(async move {
                game_service::handle_ready(state, &room_id, &format!("u{}", i), Phase::Start).await
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let view = room_service::get_room(&state, &room_id).await.unwrap();
    assert_eq!(view.room.phase, Phase::Discussion);
    assert_eq!(view.room.days, 2);
    assert!(view.members.iter().all(|u| !u.is_awaiting));
}

#[tokio::test]
async fn test_stale_ready_signal_is_rejected() {
    let state = AppState::new();
    let room_id = setup_room(&state, 4).await;
    game_service::start_game(state.clone(), &room_id)
        .await
        .unwrap();

    // 現在は開始フェーズ。議論フェーズ宛てのシグナルは受け付けない
    let result =
        game_service::handle_ready(state.clone(), &room_id, "u0", Phase::Discussion).await;
    assert!(matches!(result, Err(ServiceError::InvalidPhase { .. })));

    // ルーム自体の状態は変わっていない
    let view = room_service::get_room(&state, &room_id).await.unwrap();
    assert_eq!(view.room.phase, Phase::Start);
    assert!(view.members.iter().all(|u| !u.is_awaiting));
}

#[tokio::test]
async fn test_ready_signal_for_unknown_room_is_not_found() {
    let state = AppState::new();
    let result =
        game_service::handle_ready(state, "no-such-room", "u0", Phase::Start).await;
    assert!(matches!(result, Err(ServiceError::RoomNotFound(_))));
}

#[tokio::test]
async fn test_ready_signal_before_game_start_is_rejected() {
    let state = AppState::new();
    let room_id = setup_room(&state, 4).await;

    let result = game_service::handle_ready(state.clone(), &room_id, "u0", Phase::Start).await;
    assert!(matches!(result, Err(ServiceError::NotInProgress(_))));
}
