use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Goleiro,
    Defesa,
    MeioCampo,
    Ataque,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goleiro,
        Position::Defesa,
        Position::MeioCampo,
        Position::Ataque,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Position::Goleiro => "Goleiro",
            Position::Defesa => "Defesa",
            Position::MeioCampo => "Meio-Campo",
            Position::Ataque => "Ataque",
        }
    }

    pub fn parse(raw: &str) -> Option<Position> {
        let raw = raw.trim();
        Position::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Agendado,
    Cancelado,
    Finalizado,
}

impl MatchStatus {
    pub const ALL: [MatchStatus; 3] = [
        MatchStatus::Agendado,
        MatchStatus::Cancelado,
        MatchStatus::Finalizado,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MatchStatus::Agendado => "Agendado",
            MatchStatus::Cancelado => "Cancelado",
            MatchStatus::Finalizado => "Finalizado",
        }
    }

    pub fn parse(raw: &str) -> Option<MatchStatus> {
        let raw = raw.trim();
        MatchStatus::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Goal,
    YellowCard,
    RedCard,
}

impl EventKind {
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Goal => "Gol",
            EventKind::YellowCard => "Cartão Amarelo",
            EventKind::RedCard => "Cartão Vermelho",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub id: String,
    pub player_id: String,
    pub kind: EventKind,
    // The sheet editor never sets this; it stays 0.
    pub minute: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub nickname: String,
    pub number: u32,
    pub position: Position,
    pub goals: u32,
    pub assists: u32,
    pub games_played: u32,
    pub rating: f32,
    pub photo: Option<String>,
    pub is_paid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub opponent: String,
    pub opponent_logo: Option<String>,
    pub date: String,
    pub location: String,
    pub status: MatchStatus,
    // Invariant: always exactly `status == Finalizado`; re-derived on every save.
    pub is_completed: bool,
    pub score_home: u8,
    pub score_away: u8,
    pub players_confirmed: Vec<String>,
    pub players_declined: Vec<String>,
    pub events: Vec<MatchEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Receita",
            TransactionKind::Expense => "Despesa",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    // Signed: positive income, negative expense. Sign and `kind` are expected
    // to agree but nothing re-checks it after the fact.
    pub amount: f64,
    pub date: String,
    pub kind: TransactionKind,
    pub category: String,
}

pub const TRANSACTION_CATEGORIES: &[&str] =
    &["Mensalidade", "Campo", "Material", "Patrocínio", "Geral"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueEntry {
    pub id: String,
    pub team_name: String,
    pub logo: Option<String>,
    // games and points are derived from wins/draws/losses on every save.
    pub games: u32,
    pub points: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

impl LeagueEntry {
    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub data: String,
    pub caption: Option<String>,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    F442,
    F433,
    F352,
    F221,
    F321,
}

impl Formation {
    pub const ALL: [Formation; 5] = [
        Formation::F442,
        Formation::F433,
        Formation::F352,
        Formation::F221,
        Formation::F321,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F352 => "3-5-2",
            Formation::F221 => "2-2-1",
            Formation::F321 => "3-2-1",
        }
    }

    /// On-field slots including the keeper: 11, or 6 for the reduced-roster shapes.
    pub fn slots(self) -> usize {
        match self {
            Formation::F442 | Formation::F433 | Formation::F352 => 11,
            Formation::F221 | Formation::F321 => 6,
        }
    }
}
