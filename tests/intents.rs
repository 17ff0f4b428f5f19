use arena_terminal::derived;
use arena_terminal::model::{EventKind, MatchStatus, TransactionKind};
use arena_terminal::state::{
    AppState, Intent, LeagueEntryDraft, MatchDraft, PlayerDraft, Tab, TransactionDraft,
    apply_intent,
};

fn admin() -> AppState {
    let mut state = AppState::new();
    state.is_admin = true;
    state
}

#[test]
fn login_with_wrong_pin_sets_error_and_stays_locked() {
    let mut state = AppState::new();
    apply_intent(
        &mut state,
        Intent::Login {
            pin: "0000".to_string(),
        },
    );
    assert!(!state.is_admin);
    assert!(state.login_error);
}

#[test]
fn logout_drops_admin() {
    let mut state = admin();
    apply_intent(&mut state, Intent::Logout);
    assert!(!state.is_admin);
}

#[test]
fn new_player_gets_defaults_and_position_of_first_athlete() {
    let mut state = admin();
    let first_position = state.players[0].position;
    let before = state.players.len();
    apply_intent(
        &mut state,
        Intent::SavePlayer {
            editing: None,
            draft: PlayerDraft::default(),
        },
    );
    let created = state.players.last().unwrap();
    assert_eq!(state.players.len(), before + 1);
    assert_eq!(created.name, "Novo Atleta");
    assert_eq!(created.nickname, "Atleta");
    assert_eq!(created.number, 0);
    assert_eq!(created.position, first_position);
    assert_eq!(created.goals, 0);
    assert!((created.rating - 6.0).abs() < f32::EPSILON);
    assert!(!created.is_paid);
}

#[test]
fn editing_a_player_merges_without_touching_counters() {
    let mut state = admin();
    let id = state.players[0].id.clone();
    let goals_before = state.players[0].goals;
    apply_intent(
        &mut state,
        Intent::SavePlayer {
            editing: Some(id.clone()),
            draft: PlayerDraft {
                nickname: Some("Capitão".to_string()),
                number: Some(99),
                ..PlayerDraft::default()
            },
        },
    );
    let player = state.players.iter().find(|p| p.id == id).unwrap();
    assert_eq!(player.nickname, "Capitão");
    assert_eq!(player.number, 99);
    assert_eq!(player.goals, goals_before);
    assert_eq!(player.name, "Ricardo Silva");
}

#[test]
fn toggle_payment_flips_the_flag() {
    let mut state = admin();
    let id = state.players[0].id.clone();
    let before = state.players[0].is_paid;
    apply_intent(&mut state, Intent::TogglePayment { player_id: id.clone() });
    assert_eq!(
        state.players.iter().find(|p| p.id == id).unwrap().is_paid,
        !before
    );
}

#[test]
fn new_match_gets_defaults_and_is_prepended() {
    let mut state = admin();
    apply_intent(
        &mut state,
        Intent::SaveMatch {
            editing: None,
            draft: MatchDraft::default(),
        },
    );
    let m = &state.matches[0];
    assert_eq!(m.opponent, "Adversário");
    assert_eq!(m.location, "Local a definir");
    assert_eq!(m.status, MatchStatus::Agendado);
    assert!(!m.is_completed);
    assert_eq!(m.score_home, 0);
    assert_eq!(m.score_away, 0);
    assert!(m.players_confirmed.is_empty());
    assert!(m.players_declined.is_empty());
    assert!(m.events.is_empty());
}

#[test]
fn is_completed_always_tracks_finalizado() {
    let mut state = admin();
    let id = state.matches[1].id.clone();
    apply_intent(
        &mut state,
        Intent::UpdateMatchStatus {
            match_id: id.clone(),
            status: MatchStatus::Finalizado,
        },
    );
    assert!(state.match_by_id(&id).unwrap().is_completed);

    apply_intent(
        &mut state,
        Intent::UpdateMatchStatus {
            match_id: id.clone(),
            status: MatchStatus::Cancelado,
        },
    );
    assert!(!state.match_by_id(&id).unwrap().is_completed);

    // Saving a status through the editor re-derives the flag too.
    apply_intent(
        &mut state,
        Intent::SaveMatch {
            editing: Some(id.clone()),
            draft: MatchDraft {
                status: Some(MatchStatus::Finalizado),
                ..MatchDraft::default()
            },
        },
    );
    assert!(state.match_by_id(&id).unwrap().is_completed);
}

#[test]
fn presence_sets_stay_disjoint_across_flips() {
    let mut state = AppState::new();
    let match_id = state.matches[1].id.clone();
    let player_id = state.players[1].id.clone();

    apply_intent(
        &mut state,
        Intent::TogglePresence {
            match_id: match_id.clone(),
            player_id: player_id.clone(),
            attending: true,
        },
    );
    let m = state.match_by_id(&match_id).unwrap();
    assert!(m.players_confirmed.contains(&player_id));
    assert!(!m.players_declined.contains(&player_id));

    apply_intent(
        &mut state,
        Intent::TogglePresence {
            match_id: match_id.clone(),
            player_id: player_id.clone(),
            attending: false,
        },
    );
    let m = state.match_by_id(&match_id).unwrap();
    assert!(!m.players_confirmed.contains(&player_id));
    assert!(m.players_declined.contains(&player_id));
}

#[test]
fn presence_is_not_gated_behind_admin() {
    let mut state = AppState::new();
    assert!(!state.is_admin);
    let match_id = state.matches[1].id.clone();
    let player_id = state.players[3].id.clone();
    apply_intent(
        &mut state,
        Intent::TogglePresence {
            match_id: match_id.clone(),
            player_id: player_id.clone(),
            attending: false,
        },
    );
    assert!(
        state
            .match_by_id(&match_id)
            .unwrap()
            .players_declined
            .contains(&player_id)
    );
}

#[test]
fn goal_events_move_only_the_home_score() {
    let mut state = admin();
    let match_id = state.matches[1].id.clone();
    let player_id = state.players[2].id.clone();

    apply_intent(
        &mut state,
        Intent::AddMatchEvent {
            match_id: match_id.clone(),
            player_id: player_id.clone(),
            kind: EventKind::Goal,
        },
    );
    let m = state.match_by_id(&match_id).unwrap();
    assert_eq!(m.score_home, 1);
    assert_eq!(m.score_away, 0);
    let event_id = m.events[0].id.clone();

    // Cards never touch the score.
    apply_intent(
        &mut state,
        Intent::AddMatchEvent {
            match_id: match_id.clone(),
            player_id,
            kind: EventKind::YellowCard,
        },
    );
    assert_eq!(state.match_by_id(&match_id).unwrap().score_home, 1);

    apply_intent(
        &mut state,
        Intent::RemoveMatchEvent {
            match_id: match_id.clone(),
            event_id,
        },
    );
    let m = state.match_by_id(&match_id).unwrap();
    assert_eq!(m.score_home, 0);
    assert_eq!(m.events.len(), 1);
}

#[test]
fn removing_a_goal_at_zero_floors_the_score() {
    let mut state = admin();
    let match_id = state.matches[1].id.clone();
    let player_id = state.players[0].id.clone();
    apply_intent(
        &mut state,
        Intent::AddMatchEvent {
            match_id: match_id.clone(),
            player_id,
            kind: EventKind::Goal,
        },
    );
    let event_id = state.match_by_id(&match_id).unwrap().events[0].id.clone();

    // Manually zero the score, then remove the goal.
    apply_intent(
        &mut state,
        Intent::SaveMatch {
            editing: Some(match_id.clone()),
            draft: MatchDraft {
                score_home: Some(0),
                ..MatchDraft::default()
            },
        },
    );
    apply_intent(
        &mut state,
        Intent::RemoveMatchEvent {
            match_id: match_id.clone(),
            event_id,
        },
    );
    assert_eq!(state.match_by_id(&match_id).unwrap().score_home, 0);
}

#[test]
fn transactions_prepend_and_default() {
    let mut state = admin();
    let balance_before = derived::balance(&state.transactions);
    apply_intent(
        &mut state,
        Intent::SaveTransaction {
            draft: TransactionDraft {
                amount: Some(-75.0),
                kind: Some(TransactionKind::Expense),
                ..TransactionDraft::default()
            },
        },
    );
    let t = &state.transactions[0];
    assert_eq!(t.description, "Transação");
    assert_eq!(t.category, "Geral");
    assert_eq!(t.kind, TransactionKind::Expense);
    let balance_after = derived::balance(&state.transactions);
    assert!((balance_after - (balance_before - 75.0)).abs() < 1e-9);
}

#[test]
fn league_save_discards_supplied_games_and_points() {
    let mut state = admin();
    apply_intent(
        &mut state,
        Intent::SaveLeagueEntry {
            editing: None,
            draft: LeagueEntryDraft {
                team_name: Some("Estrela do Norte".to_string()),
                wins: Some(4),
                draws: Some(0),
                losses: Some(4),
                ..LeagueEntryDraft::default()
            },
        },
    );
    let entry = state.league_entries.last().unwrap();
    assert_eq!(entry.games, 8);
    assert_eq!(entry.points, 12);
}

#[test]
fn league_save_without_name_uses_default() {
    let mut state = admin();
    apply_intent(
        &mut state,
        Intent::SaveLeagueEntry {
            editing: None,
            draft: LeagueEntryDraft::default(),
        },
    );
    assert_eq!(state.league_entries.last().unwrap().team_name, "Nova Equipe");
}

#[test]
fn delete_league_entry_waits_for_confirmation() {
    let mut state = admin();
    let entry_id = state.league_entries[0].id.clone();
    let before = state.league_entries.len();

    apply_intent(
        &mut state,
        Intent::DeleteLeagueEntry {
            entry_id: entry_id.clone(),
        },
    );
    // Armed, not applied.
    assert!(state.pending.is_some());
    assert_eq!(state.league_entries.len(), before);

    apply_intent(&mut state, Intent::CancelPending);
    assert!(state.pending.is_none());
    assert_eq!(state.league_entries.len(), before);

    apply_intent(&mut state, Intent::DeleteLeagueEntry { entry_id: entry_id.clone() });
    apply_intent(&mut state, Intent::ConfirmPending);
    assert!(state.pending.is_none());
    assert_eq!(state.league_entries.len(), before - 1);
    assert!(state.league_entries.iter().all(|e| e.id != entry_id));
}

#[test]
fn gallery_add_and_confirmed_delete() {
    let mut state = admin();
    apply_intent(
        &mut state,
        Intent::AddGalleryImage {
            data: "data:image/png;base64,AAAA".to_string(),
            caption: Some("  ".to_string()),
        },
    );
    let image = state.gallery.last().unwrap();
    // Blank captions are dropped.
    assert!(image.caption.is_none());
    let image_id = image.id.clone();

    apply_intent(&mut state, Intent::DeleteGalleryImage { image_id });
    apply_intent(&mut state, Intent::ConfirmPending);
    assert!(state.gallery.is_empty());
}

#[test]
fn gated_intents_are_noops_without_admin() {
    let mut state = AppState::new();
    let players = state.players.clone();
    let matches = state.matches.clone();
    let transactions = state.transactions.clone();
    let entries = state.league_entries.clone();
    let gallery = state.gallery.clone();
    let board = state.board.positions();
    let player_id = players[0].id.clone();
    let match_id = matches[0].id.clone();
    let event_id = matches[0].events[0].id.clone();

    apply_intent(
        &mut state,
        Intent::SavePlayer {
            editing: None,
            draft: PlayerDraft::default(),
        },
    );
    apply_intent(
        &mut state,
        Intent::TogglePayment {
            player_id: player_id.clone(),
        },
    );
    apply_intent(
        &mut state,
        Intent::SaveMatch {
            editing: None,
            draft: MatchDraft::default(),
        },
    );
    apply_intent(
        &mut state,
        Intent::UpdateMatchStatus {
            match_id: match_id.clone(),
            status: MatchStatus::Cancelado,
        },
    );
    apply_intent(
        &mut state,
        Intent::AddMatchEvent {
            match_id: match_id.clone(),
            player_id,
            kind: EventKind::Goal,
        },
    );
    apply_intent(
        &mut state,
        Intent::RemoveMatchEvent { match_id, event_id },
    );
    apply_intent(
        &mut state,
        Intent::SaveTransaction {
            draft: TransactionDraft::default(),
        },
    );
    apply_intent(
        &mut state,
        Intent::SaveLeagueEntry {
            editing: None,
            draft: LeagueEntryDraft::default(),
        },
    );
    apply_intent(
        &mut state,
        Intent::DeleteLeagueEntry {
            entry_id: entries[0].id.clone(),
        },
    );
    apply_intent(
        &mut state,
        Intent::SetLeagueName {
            name: "Outra".to_string(),
        },
    );
    apply_intent(
        &mut state,
        Intent::AddGalleryImage {
            data: "data:image/png;base64,AAAA".to_string(),
            caption: None,
        },
    );
    apply_intent(
        &mut state,
        Intent::NudgeMarker {
            idx: 0,
            dx: 5.0,
            dy: 5.0,
        },
    );

    assert_eq!(state.players, players);
    assert_eq!(state.matches, matches);
    assert_eq!(state.transactions, transactions);
    assert_eq!(state.league_entries, entries);
    assert_eq!(state.gallery, gallery);
    assert_eq!(state.board.positions(), board);
    assert!(!state.board.has_custom());
    assert!(state.pending.is_none());
    assert_ne!(state.league_name, "Outra");
}

#[test]
fn ids_are_monotonic_and_prefixed() {
    let mut state = admin();
    apply_intent(
        &mut state,
        Intent::SavePlayer {
            editing: None,
            draft: PlayerDraft::default(),
        },
    );
    apply_intent(
        &mut state,
        Intent::SavePlayer {
            editing: None,
            draft: PlayerDraft::default(),
        },
    );
    let n = state.players.len();
    let a = &state.players[n - 2].id;
    let b = &state.players[n - 1].id;
    assert!(a.starts_with('p') && b.starts_with('p'));
    let a_n: u64 = a[1..].parse().unwrap();
    let b_n: u64 = b[1..].parse().unwrap();
    assert_eq!(b_n, a_n + 1);
}

#[test]
fn selection_clamps_after_confirmed_delete() {
    let mut state = admin();
    state.set_tab(Tab::Table);
    state.selected = state.league_entries.len() - 1;
    let entry_id = state.league_entries.last().unwrap().id.clone();
    apply_intent(&mut state, Intent::DeleteLeagueEntry { entry_id });
    apply_intent(&mut state, Intent::ConfirmPending);
    assert_eq!(state.selected, state.league_entries.len() - 1);
}
