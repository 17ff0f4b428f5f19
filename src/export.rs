use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::derived;
use crate::model::{LeagueEntry, Player, Transaction};
use crate::standings;

pub struct ExportReport {
    pub entries: usize,
    pub transactions: usize,
    pub players: usize,
}

/// Writes the standings, the ledger and the player leaderboard into one
/// workbook. Purely a read of the current collections.
pub fn export_workbook(
    path: &Path,
    entries: &[LeagueEntry],
    transactions: &[Transaction],
    players: &[Player],
) -> Result<ExportReport> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet().set_name("Classificação")?;
    write_rows(sheet, &standings_rows(entries))?;

    let sheet = workbook.add_worksheet().set_name("Caixa")?;
    write_rows(sheet, &ledger_rows(transactions))?;

    let sheet = workbook.add_worksheet().set_name("Artilharia")?;
    write_rows(sheet, &leaderboard_rows(players))?;

    workbook
        .save(path)
        .with_context(|| format!("save workbook {}", path.display()))?;

    Ok(ExportReport {
        entries: entries.len(),
        transactions: transactions.len(),
        players: players.len(),
    })
}

fn standings_rows(entries: &[LeagueEntry]) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Pos".to_string(),
        "Equipe".to_string(),
        "J".to_string(),
        "Pts".to_string(),
        "V".to_string(),
        "E".to_string(),
        "D".to_string(),
        "GP".to_string(),
        "GC".to_string(),
        "SG".to_string(),
        "CA".to_string(),
        "CV".to_string(),
        "Aprov %".to_string(),
    ]];
    for (idx, entry) in standings::sorted(entries).iter().enumerate() {
        rows.push(vec![
            format!("{}", idx + 1),
            entry.team_name.clone(),
            entry.games.to_string(),
            entry.points.to_string(),
            entry.wins.to_string(),
            entry.draws.to_string(),
            entry.losses.to_string(),
            entry.goals_for.to_string(),
            entry.goals_against.to_string(),
            entry.goal_difference().to_string(),
            entry.yellow_cards.to_string(),
            entry.red_cards.to_string(),
            standings::aproveitamento(entry).to_string(),
        ]);
    }
    rows
}

fn ledger_rows(transactions: &[Transaction]) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Data".to_string(),
        "Descrição".to_string(),
        "Categoria".to_string(),
        "Tipo".to_string(),
        "Valor".to_string(),
    ]];
    for t in transactions {
        rows.push(vec![
            t.date.clone(),
            t.description.clone(),
            t.category.clone(),
            t.kind.label().to_string(),
            format!("{:.2}", t.amount),
        ]);
    }
    rows.push(vec![
        String::new(),
        String::new(),
        String::new(),
        "Saldo".to_string(),
        format!("{:.2}", derived::balance(transactions)),
    ]);
    rows
}

fn leaderboard_rows(players: &[Player]) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Atleta".to_string(),
        "Apelido".to_string(),
        "Posição".to_string(),
        "Gols".to_string(),
        "Assistências".to_string(),
        "Jogos".to_string(),
        "Nota".to_string(),
    ]];
    for (player, goals, assists) in derived::leaderboard(players) {
        rows.push(vec![
            player.name.clone(),
            player.nickname.clone(),
            player.position.label().to_string(),
            goals.to_string(),
            assists.to_string(),
            player.games_played.to_string(),
            format!("{:.1}", player.rating),
        ]);
    }
    rows
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
