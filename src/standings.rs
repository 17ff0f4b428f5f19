use std::cmp::Ordering;

use crate::model::LeagueEntry;

/// Display order for the league table: points desc, wins desc, goal
/// difference desc, red cards asc, yellow cards asc. Ties beyond that keep
/// input order (the sort must stay stable).
pub fn sorted(entries: &[LeagueEntry]) -> Vec<&LeagueEntry> {
    let mut out: Vec<&LeagueEntry> = entries.iter().collect();
    out.sort_by(|a, b| compare(a, b));
    out
}

pub fn compare(a: &LeagueEntry, b: &LeagueEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| a.red_cards.cmp(&b.red_cards))
        .then_with(|| a.yellow_cards.cmp(&b.yellow_cards))
}

/// Rewrites the derivable fields from the outcome counts. Whatever the
/// editor sent for games/points is discarded. The editors accept any u32,
/// so the sums saturate instead of overflowing.
pub fn finalize_entry(entry: &mut LeagueEntry) {
    entry.games = entry
        .wins
        .saturating_add(entry.draws)
        .saturating_add(entry.losses);
    entry.points = entry.wins.saturating_mul(3).saturating_add(entry.draws);
}

/// Points earned as a percentage of the maximum available (3 per game).
pub fn aproveitamento(entry: &LeagueEntry) -> u32 {
    if entry.games == 0 {
        return 0;
    }
    let pct = entry.points as f64 / (entry.games as f64 * 3.0) * 100.0;
    pct.round() as u32
}

/// Finds "our" entry by testing whether the entry name contains the first
/// token of the configured team name, case-insensitive. Ambiguous when two
/// entries share a first word; the first in collection order wins.
pub fn campaign<'a>(entries: &'a [LeagueEntry], team_name: &str) -> Option<&'a LeagueEntry> {
    let token = team_name.split_whitespace().next()?.to_uppercase();
    entries
        .iter()
        .find(|e| e.team_name.to_uppercase().contains(&token))
}
