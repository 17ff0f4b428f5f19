use arena_terminal::derived::{
    balance, format_date, last_match, leaderboard, next_match, parse_date,
};
use arena_terminal::model::{Match, MatchStatus, Player, Position, Transaction, TransactionKind};

fn fixture_match(id: &str, date: &str, status: MatchStatus) -> Match {
    Match {
        id: id.to_string(),
        opponent: format!("Rival {id}"),
        opponent_logo: None,
        date: date.to_string(),
        location: "Campo 1".to_string(),
        status,
        is_completed: status == MatchStatus::Finalizado,
        score_home: 0,
        score_away: 0,
        players_confirmed: Vec::new(),
        players_declined: Vec::new(),
        events: Vec::new(),
    }
}

fn fixture_player(id: &str, goals: u32, assists: u32) -> Player {
    Player {
        id: id.to_string(),
        name: format!("Atleta {id}"),
        nickname: id.to_string(),
        number: 0,
        position: Position::Ataque,
        goals,
        assists,
        games_played: 0,
        rating: 6.0,
        photo: None,
        is_paid: false,
    }
}

fn fixture_tx(amount: f64) -> Transaction {
    Transaction {
        id: "t".to_string(),
        description: "x".to_string(),
        amount,
        date: "2024-06-01".to_string(),
        kind: if amount >= 0.0 {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        },
        category: "Geral".to_string(),
    }
}

#[test]
fn balance_sums_the_signed_ledger() {
    let txs = vec![fixture_tx(350.0), fixture_tx(-180.0), fixture_tx(-240.0)];
    assert!((balance(&txs) - (-70.0)).abs() < 1e-9);
    assert_eq!(balance(&[]), 0.0);
}

#[test]
fn last_match_is_the_latest_finished_one() {
    let matches = vec![
        fixture_match("a", "2024-03-01T19:00", MatchStatus::Finalizado),
        fixture_match("b", "2024-05-20T19:00", MatchStatus::Finalizado),
        // Later but only scheduled.
        fixture_match("c", "2026-01-01T19:00", MatchStatus::Agendado),
        fixture_match("d", "2024-06-01T19:00", MatchStatus::Cancelado),
    ];
    assert_eq!(last_match(&matches).unwrap().id, "b");
}

#[test]
fn next_match_is_the_nearest_scheduled_one() {
    let matches = vec![
        fixture_match("a", "2026-09-01T20:00", MatchStatus::Agendado),
        fixture_match("b", "2026-06-15T20:30", MatchStatus::Agendado),
        fixture_match("c", "2024-05-20T19:00", MatchStatus::Finalizado),
    ];
    assert_eq!(next_match(&matches).unwrap().id, "b");
}

#[test]
fn unparseable_dates_never_win() {
    let matches = vec![
        fixture_match("junk", "amanhã à noite", MatchStatus::Agendado),
        fixture_match("real", "2026-06-15T20:30", MatchStatus::Agendado),
    ];
    assert_eq!(next_match(&matches).unwrap().id, "real");

    let finished = vec![
        fixture_match("junk", "???", MatchStatus::Finalizado),
        fixture_match("real", "2024-05-20T19:00", MatchStatus::Finalizado),
    ];
    assert_eq!(last_match(&finished).unwrap().id, "real");
}

#[test]
fn no_candidates_yields_none() {
    let matches = vec![fixture_match("a", "2024-05-20T19:00", MatchStatus::Cancelado)];
    assert!(last_match(&matches).is_none());
    assert!(next_match(&matches).is_none());
}

#[test]
fn leaderboard_orders_by_goals_descending() {
    let players = vec![
        fixture_player("Lipe", 5, 10),
        fixture_player("Bruxo", 15, 4),
        fixture_player("Ricardinho", 12, 8),
    ];
    let rows = leaderboard(&players);
    let names: Vec<&str> = rows.iter().map(|(p, _, _)| p.nickname.as_str()).collect();
    assert_eq!(names, vec!["Bruxo", "Ricardinho", "Lipe"]);
    assert_eq!(rows[0].1, 15);
    assert_eq!(rows[0].2, 4);
}

#[test]
fn parse_date_accepts_the_editor_formats() {
    assert!(parse_date("2026-06-15T20:30").is_some());
    assert!(parse_date("2026-06-15 20:30").is_some());
    assert!(parse_date("2026-06-15T20:30:00").is_some());
    assert!(parse_date("2026-06-15").is_some());
    assert!(parse_date("15/06/2026").is_none());
    assert!(parse_date("").is_none());
}

#[test]
fn format_date_renders_brazilian_style() {
    assert_eq!(format_date("2026-06-15T20:30"), "15/06/2026 20:30");
    // Unknown strings pass through untouched.
    assert_eq!(format_date("a definir"), "a definir");
}
