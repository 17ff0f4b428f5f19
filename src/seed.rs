use crate::model::{
    EventKind, LeagueEntry, Match, MatchEvent, MatchStatus, Player, Position, Transaction,
    TransactionKind,
};
use crate::state::IdGen;

pub fn seed_players(ids: &IdGen) -> Vec<Player> {
    let rows: [(&str, &str, u32, Position, u32, u32, u32, f32, bool); 5] = [
        ("Ricardo Silva", "Ricardinho", 10, Position::MeioCampo, 12, 8, 15, 8.5, true),
        ("Mateus Oliveira", "Muralha", 1, Position::Goleiro, 0, 1, 14, 7.8, true),
        ("Bruno Santos", "Bruxo", 7, Position::Ataque, 15, 4, 12, 9.1, false),
        ("Carlos Ferreira", "Carlão", 4, Position::Defesa, 2, 0, 15, 7.2, true),
        ("Felipe Diniz", "Lipe", 8, Position::MeioCampo, 5, 10, 13, 8.0, true),
    ];
    rows.into_iter()
        .map(
            |(name, nickname, number, position, goals, assists, games_played, rating, is_paid)| {
                Player {
                    id: ids.next("p"),
                    name: name.to_string(),
                    nickname: nickname.to_string(),
                    number,
                    position,
                    goals,
                    assists,
                    games_played,
                    rating,
                    photo: None,
                    is_paid,
                }
            },
        )
        .collect()
}

pub fn seed_matches(ids: &IdGen, players: &[Player]) -> Vec<Match> {
    let confirmed_all: Vec<String> = players.iter().map(|p| p.id.clone()).collect();
    let scorer = |idx: usize| players.get(idx).map(|p| p.id.clone()).unwrap_or_default();

    let finished = Match {
        id: ids.next("m"),
        opponent: "Os Galáticos FC".to_string(),
        opponent_logo: None,
        date: "2024-05-20T19:00".to_string(),
        location: "Arena Central".to_string(),
        status: MatchStatus::Finalizado,
        is_completed: true,
        score_home: 4,
        score_away: 2,
        players_confirmed: confirmed_all,
        players_declined: Vec::new(),
        events: vec![
            MatchEvent {
                id: ids.next("e"),
                player_id: scorer(0),
                kind: EventKind::Goal,
                minute: 0,
            },
            MatchEvent {
                id: ids.next("e"),
                player_id: scorer(2),
                kind: EventKind::Goal,
                minute: 0,
            },
            MatchEvent {
                id: ids.next("e"),
                player_id: scorer(2),
                kind: EventKind::Goal,
                minute: 0,
            },
            MatchEvent {
                id: ids.next("e"),
                player_id: scorer(0),
                kind: EventKind::YellowCard,
                minute: 0,
            },
        ],
    };

    let scheduled = Match {
        id: ids.next("m"),
        opponent: "Vila Real Amador".to_string(),
        opponent_logo: None,
        date: "2026-06-15T20:30".to_string(),
        location: "Campo do Zé".to_string(),
        status: MatchStatus::Agendado,
        is_completed: false,
        score_home: 0,
        score_away: 0,
        players_confirmed: vec![scorer(0), scorer(2), scorer(4)],
        players_declined: Vec::new(),
        events: Vec::new(),
    };

    vec![finished, scheduled]
}

pub fn seed_transactions(ids: &IdGen) -> Vec<Transaction> {
    let rows: [(&str, f64, &str, TransactionKind, &str); 4] = [
        ("Mensalidade Junho", 350.0, "2024-06-01", TransactionKind::Income, "Mensalidade"),
        ("Aluguel de Quadra", -180.0, "2024-06-05", TransactionKind::Expense, "Campo"),
        ("Bolas Novas (2x)", -240.0, "2024-06-10", TransactionKind::Expense, "Material"),
        ("Patrocínio Padaria Sol", 500.0, "2024-06-12", TransactionKind::Income, "Patrocínio"),
    ];
    rows.into_iter()
        .map(|(description, amount, date, kind, category)| Transaction {
            id: ids.next("t"),
            description: description.to_string(),
            amount,
            date: date.to_string(),
            kind,
            category: category.to_string(),
        })
        .collect()
}

pub fn seed_league_entries(ids: &IdGen) -> Vec<LeagueEntry> {
    let rows: [(&str, u32, u32, u32, u32, u32, u32, u32, u32, u32); 5] = [
        ("Boa Vista F.C.", 7, 7, 2, 1, 4, 15, 23, 2, 0),
        ("Azurra", 7, 7, 2, 1, 4, 16, 21, 1, 0),
        ("Limp & Cia", 7, 18, 6, 0, 1, 27, 11, 1, 0),
        ("FJ Motors", 8, 12, 4, 0, 4, 25, 25, 2, 1),
        ("Águia F.C.", 7, 9, 3, 0, 4, 17, 20, 3, 0),
    ];
    rows.into_iter()
        .map(
            |(team_name, games, points, wins, draws, losses, gf, ga, yellow, red)| LeagueEntry {
                id: ids.next("l"),
                team_name: team_name.to_string(),
                logo: None,
                games,
                points,
                wins,
                draws,
                losses,
                goals_for: gf,
                goals_against: ga,
                yellow_cards: yellow,
                red_cards: red,
            },
        )
        .collect()
}
