use arena_terminal::model::LeagueEntry;
use arena_terminal::standings::{aproveitamento, campaign, finalize_entry, sorted};

fn entry(team_name: &str) -> LeagueEntry {
    LeagueEntry {
        id: team_name.to_lowercase().replace(' ', "-"),
        team_name: team_name.to_string(),
        logo: None,
        games: 0,
        points: 0,
        wins: 0,
        draws: 0,
        losses: 0,
        goals_for: 0,
        goals_against: 0,
        yellow_cards: 0,
        red_cards: 0,
    }
}

fn order(entries: &[LeagueEntry]) -> Vec<&str> {
    sorted(entries).iter().map(|e| e.team_name.as_str()).collect()
}

#[test]
fn points_dominate_every_other_key() {
    let mut a = entry("A");
    a.points = 10;
    let mut b = entry("B");
    b.points = 12;
    b.red_cards = 9;
    b.goals_against = 40;
    assert_eq!(order(&[a, b]), vec!["B", "A"]);
}

#[test]
fn wins_break_point_ties() {
    // Same points, different route there.
    let mut a = entry("A");
    a.points = 9;
    a.wins = 3;
    let mut b = entry("B");
    b.points = 9;
    b.wins = 2;
    b.draws = 3;
    b.goals_for = 30;
    assert_eq!(order(&[b, a]), vec!["A", "B"]);
}

#[test]
fn goal_difference_breaks_win_ties() {
    let mut a = entry("A");
    a.points = 9;
    a.wins = 3;
    a.goals_for = 8;
    a.goals_against = 2;
    let mut b = entry("B");
    b.points = 9;
    b.wins = 3;
    b.goals_for = 8;
    b.goals_against = 5;
    assert_eq!(order(&[b, a]), vec!["A", "B"]);
}

#[test]
fn fewer_red_cards_rank_higher_then_fewer_yellows() {
    let mut a = entry("A");
    a.red_cards = 1;
    let mut b = entry("B");
    b.red_cards = 0;
    b.yellow_cards = 5;
    let mut c = entry("C");
    c.red_cards = 0;
    c.yellow_cards = 2;
    assert_eq!(order(&[a, b, c]), vec!["C", "B", "A"]);
}

#[test]
fn full_ties_keep_input_order() {
    let a = entry("Primeiro");
    let b = entry("Segundo");
    let c = entry("Terceiro");
    assert_eq!(order(&[a, b, c]), vec!["Primeiro", "Segundo", "Terceiro"]);
}

#[test]
fn finalize_recomputes_games_and_points() {
    let mut e = entry("X");
    e.wins = 4;
    e.draws = 0;
    e.losses = 4;
    // Garbage in the derived fields is overwritten.
    e.games = 99;
    e.points = 1;
    finalize_entry(&mut e);
    assert_eq!(e.games, 8);
    assert_eq!(e.points, 12);
}

#[test]
fn finalize_saturates_on_absurd_counts() {
    let mut e = entry("X");
    e.wins = u32::MAX;
    e.draws = 7;
    e.losses = 3;
    finalize_entry(&mut e);
    assert_eq!(e.games, u32::MAX);
    assert_eq!(e.points, u32::MAX);
}

#[test]
fn aproveitamento_rounds_to_whole_percent() {
    let mut e = entry("X");
    e.wins = 4;
    e.draws = 0;
    e.losses = 4;
    finalize_entry(&mut e);
    // 12 of 24 possible points.
    assert_eq!(aproveitamento(&e), 50);

    let mut odd = entry("Y");
    odd.wins = 2;
    odd.draws = 1;
    odd.losses = 4;
    finalize_entry(&mut odd);
    // 7 / 21 = 33.33..%
    assert_eq!(aproveitamento(&odd), 33);
}

#[test]
fn aproveitamento_of_empty_record_is_zero() {
    let e = entry("X");
    assert_eq!(aproveitamento(&e), 0);
}

#[test]
fn campaign_matches_on_first_token_case_insensitive() {
    let entries = vec![entry("Azurra"), entry("Boa Vista F.C."), entry("FJ Motors")];
    let found = campaign(&entries, "boa vista FC").unwrap();
    assert_eq!(found.team_name, "Boa Vista F.C.");
}

#[test]
fn campaign_takes_first_match_in_collection_order() {
    let entries = vec![entry("Real Madrid"), entry("Real Sociedade")];
    let found = campaign(&entries, "Real Oeste").unwrap();
    assert_eq!(found.team_name, "Real Madrid");
}

#[test]
fn campaign_misses_when_no_name_contains_the_token() {
    let entries = vec![entry("Azurra"), entry("FJ Motors")];
    assert!(campaign(&entries, "Boa Vista FC").is_none());
}
