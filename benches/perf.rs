use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use arena_terminal::derived;
use arena_terminal::model::{LeagueEntry, Transaction, TransactionKind};
use arena_terminal::standings;
use arena_terminal::state::{AppState, Intent, PlayerDraft, apply_intent};

fn big_table(size: u32) -> Vec<LeagueEntry> {
    (0..size)
        .map(|idx| {
            let mut entry = LeagueEntry {
                id: format!("l{idx}"),
                team_name: format!("Equipe {idx}"),
                logo: None,
                games: 0,
                points: 0,
                wins: idx % 7,
                draws: idx % 3,
                losses: idx % 5,
                goals_for: idx % 29,
                goals_against: idx % 23,
                yellow_cards: idx % 11,
                red_cards: idx % 4,
            };
            standings::finalize_entry(&mut entry);
            entry
        })
        .collect()
}

fn big_ledger(size: u32) -> Vec<Transaction> {
    (0..size)
        .map(|idx| Transaction {
            id: format!("t{idx}"),
            description: format!("Lançamento {idx}"),
            amount: if idx % 2 == 0 { 120.0 } else { -85.5 },
            date: "2024-06-01".to_string(),
            kind: if idx % 2 == 0 {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            },
            category: "Geral".to_string(),
        })
        .collect()
}

fn bench_standings_sort(c: &mut Criterion) {
    let entries = big_table(200);
    c.bench_function("standings_sort", |b| {
        b.iter(|| {
            let ordered = standings::sorted(black_box(&entries));
            black_box(ordered.len());
        })
    });
}

fn bench_ledger_balance(c: &mut Criterion) {
    let transactions = big_ledger(5_000);
    c.bench_function("ledger_balance", |b| {
        b.iter(|| {
            black_box(derived::balance(black_box(&transactions)));
        })
    });
}

fn bench_leaderboard(c: &mut Criterion) {
    let mut state = AppState::new();
    state.is_admin = true;
    for _ in 0..200 {
        apply_intent(
            &mut state,
            Intent::SavePlayer {
                editing: None,
                draft: PlayerDraft::default(),
            },
        );
    }
    c.bench_function("leaderboard", |b| {
        b.iter(|| {
            let rows = derived::leaderboard(black_box(&state.players));
            black_box(rows.len());
        })
    });
}

criterion_group!(perf, bench_standings_sort, bench_ledger_balance, bench_leaderboard);
criterion_main!(perf);
