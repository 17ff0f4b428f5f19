use chrono::NaiveDateTime;

use crate::model::{Match, MatchStatus, Player, Transaction};

/// Running cash balance: summed over the whole ledger on every read.
pub fn balance(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.amount).sum()
}

/// Most recent finished match by date. Unparseable dates lose.
pub fn last_match(matches: &[Match]) -> Option<&Match> {
    matches
        .iter()
        .filter(|m| m.status == MatchStatus::Finalizado)
        .max_by_key(|m| parse_date(&m.date).unwrap_or(NaiveDateTime::MIN))
}

/// Nearest scheduled match by date. Unparseable dates lose here too.
pub fn next_match(matches: &[Match]) -> Option<&Match> {
    matches
        .iter()
        .filter(|m| m.status == MatchStatus::Agendado)
        .min_by_key(|m| parse_date(&m.date).unwrap_or(NaiveDateTime::MAX))
}

/// Per-player goal/assist rows for the dashboard chart, top scorers first.
pub fn leaderboard(players: &[Player]) -> Vec<(&Player, u32, u32)> {
    let mut rows: Vec<(&Player, u32, u32)> =
        players.iter().map(|p| (p, p.goals, p.assists)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

const DATE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let cleaned = raw.trim();
    for fmt in DATE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(cleaned, fmt) {
            return Some(dt);
        }
    }
    chrono::NaiveDate::parse_from_str(cleaned, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => raw.to_string(),
    }
}
