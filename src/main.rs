use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Wrap};

use arena_terminal::advisor::{self, AdvisorCommand};
use arena_terminal::derived;
use arena_terminal::export;
use arena_terminal::model::{
    EventKind, Match, MatchStatus, Position, TransactionKind, TRANSACTION_CATEGORIES,
};
use arena_terminal::offline_cache;
use arena_terminal::photo;
use arena_terminal::share;
use arena_terminal::standings;
use arena_terminal::state::{
    AppState, Intent, LeagueEntryDraft, MatchDraft, PlayerDraft, Tab, TransactionDraft,
    apply_intent,
};

#[derive(Debug, Clone, PartialEq)]
enum FormKind {
    Player { editing: Option<String> },
    Match { editing: Option<String> },
    Transaction,
    League { editing: Option<String> },
    LeagueName,
    Gallery,
}

#[derive(Debug, Clone)]
struct FormField {
    label: &'static str,
    value: String,
}

#[derive(Debug, Clone)]
struct FormState {
    kind: FormKind,
    title: String,
    fields: Vec<FormField>,
    selected: usize,
}

impl FormState {
    fn field(&self, label: &str) -> String {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.trim().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
struct SheetState {
    match_id: String,
    kind: EventKind,
    player_idx: usize,
    event_idx: usize,
}

#[derive(Debug)]
enum UiMode {
    Browse,
    Login { input: String },
    Form(FormState),
    Sheet(SheetState),
}

struct App {
    state: AppState,
    mode: UiMode,
    help_overlay: bool,
    should_quit: bool,
    intent_tx: mpsc::Sender<Intent>,
    cmd_tx: Option<mpsc::Sender<AdvisorCommand>>,
}

impl App {
    fn new(intent_tx: mpsc::Sender<Intent>, cmd_tx: Option<mpsc::Sender<AdvisorCommand>>) -> Self {
        Self {
            state: AppState::new(),
            mode: UiMode::Browse,
            help_overlay: false,
            should_quit: false,
            intent_tx,
            cmd_tx,
        }
    }

    fn apply(&mut self, intent: Intent) {
        apply_intent(&mut self.state, intent);
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.help_overlay {
            self.help_overlay = false;
            return;
        }
        if self.state.pending.is_some() {
            match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('y') | KeyCode::Enter => {
                    self.apply(Intent::ConfirmPending)
                }
                _ => self.apply(Intent::CancelPending),
            }
            return;
        }
        match std::mem::replace(&mut self.mode, UiMode::Browse) {
            UiMode::Browse => self.on_browse_key(key),
            UiMode::Login { input } => self.on_login_key(key, input),
            UiMode::Form(form) => self.on_form_key(key, form),
            UiMode::Sheet(sheet) => self.on_sheet_key(key, sheet),
        }
    }

    fn on_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.help_overlay = true,
            KeyCode::Char(c @ '1'..='8') => {
                let idx = (c as usize) - ('1' as usize);
                self.state.set_tab(Tab::ALL[idx]);
            }
            KeyCode::Tab => {
                let idx = Tab::ALL
                    .iter()
                    .position(|t| *t == self.state.active_tab)
                    .unwrap_or(0);
                self.state.set_tab(Tab::ALL[(idx + 1) % Tab::ALL.len()]);
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('a') => {
                if self.state.is_admin {
                    self.apply(Intent::Logout);
                } else {
                    self.mode = UiMode::Login {
                        input: String::new(),
                    };
                }
            }
            KeyCode::Char('n') => self.open_new_form(),
            KeyCode::Char('e') => self.open_edit_form(),
            KeyCode::Char('d') => self.request_delete(),
            KeyCode::Char('S') => self.share_app(),
            KeyCode::Char('X') => self.export_workbook(),
            _ => self.on_tab_key(key),
        }
    }

    fn on_tab_key(&mut self, key: KeyEvent) {
        match self.state.active_tab {
            Tab::Home => match key.code {
                KeyCode::Char('g') => self.request_advice(),
                KeyCode::Char('r') => self.request_report(),
                _ => {}
            },
            Tab::Matches => match key.code {
                KeyCode::Enter | KeyCode::Char('s') => {
                    if let Some(m) = self.state.selected_match() {
                        self.mode = UiMode::Sheet(SheetState {
                            match_id: m.id.clone(),
                            kind: EventKind::Goal,
                            player_idx: 0,
                            event_idx: 0,
                        });
                    }
                }
                KeyCode::Char('F') => self.quick_status(MatchStatus::Finalizado),
                KeyCode::Char('C') => self.quick_status(MatchStatus::Cancelado),
                KeyCode::Char('A') => self.quick_status(MatchStatus::Agendado),
                _ => {}
            },
            Tab::Presence => match key.code {
                KeyCode::Char('y') => self.toggle_presence(true),
                KeyCode::Char('x') => self.toggle_presence(false),
                _ => {}
            },
            Tab::Finance => {
                if key.code == KeyCode::Char('p') {
                    if let Some(player) = self.state.players.get(self.state.selected) {
                        let player_id = player.id.clone();
                        self.apply(Intent::TogglePayment { player_id });
                    }
                }
            }
            Tab::Table => {
                if key.code == KeyCode::Char('r') {
                    self.mode = UiMode::Form(FormState {
                        kind: FormKind::LeagueName,
                        title: "Nome da Chave/Grupo".to_string(),
                        fields: vec![FormField {
                            label: "Nome",
                            value: self.state.league_name.clone(),
                        }],
                        selected: 0,
                    });
                }
            }
            Tab::Tactics => match key.code {
                KeyCode::Char('f') => self.state.board.cycle_formation(),
                KeyCode::Left => self.nudge(-2.0, 0.0),
                KeyCode::Right => self.nudge(2.0, 0.0),
                KeyCode::Char('u') => self.nudge(0.0, -2.0),
                KeyCode::Char('m') => self.nudge(0.0, 2.0),
                KeyCode::Char('0') => {
                    if self.state.is_admin {
                        self.state.board.reset_current();
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn on_login_key(&mut self, key: KeyEvent, mut input: String) {
        match key.code {
            KeyCode::Esc => {
                self.state.login_error = false;
            }
            KeyCode::Enter => {
                self.apply(Intent::Login { pin: input });
                if !self.state.is_admin {
                    self.mode = UiMode::Login {
                        input: String::new(),
                    };
                }
            }
            KeyCode::Backspace => {
                input.pop();
                self.mode = UiMode::Login { input };
            }
            KeyCode::Char(c) => {
                input.push(c);
                self.mode = UiMode::Login { input };
            }
            _ => self.mode = UiMode::Login { input },
        }
    }

    fn on_form_key(&mut self, key: KeyEvent, mut form: FormState) {
        match key.code {
            KeyCode::Esc => {}
            KeyCode::Enter => self.submit_form(form),
            KeyCode::Up | KeyCode::BackTab => {
                if form.selected == 0 {
                    form.selected = form.fields.len() - 1;
                } else {
                    form.selected -= 1;
                }
                self.mode = UiMode::Form(form);
            }
            KeyCode::Down | KeyCode::Tab => {
                form.selected = (form.selected + 1) % form.fields.len();
                self.mode = UiMode::Form(form);
            }
            KeyCode::Backspace => {
                form.fields[form.selected].value.pop();
                self.mode = UiMode::Form(form);
            }
            KeyCode::Char(c) => {
                form.fields[form.selected].value.push(c);
                self.mode = UiMode::Form(form);
            }
            _ => self.mode = UiMode::Form(form),
        }
    }

    fn on_sheet_key(&mut self, key: KeyEvent, mut sheet: SheetState) {
        let Some(m) = self.state.match_by_id(&sheet.match_id).cloned() else {
            return;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => {}
            KeyCode::Char('t') => {
                sheet.kind = match sheet.kind {
                    EventKind::Goal => EventKind::YellowCard,
                    EventKind::YellowCard => EventKind::RedCard,
                    EventKind::RedCard => EventKind::Goal,
                };
                self.mode = UiMode::Sheet(sheet);
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if !self.state.players.is_empty() {
                    sheet.player_idx = (sheet.player_idx + 1) % self.state.players.len();
                }
                self.mode = UiMode::Sheet(sheet);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if !self.state.players.is_empty() {
                    sheet.player_idx = sheet
                        .player_idx
                        .checked_sub(1)
                        .unwrap_or(self.state.players.len() - 1);
                }
                self.mode = UiMode::Sheet(sheet);
            }
            KeyCode::Left => {
                sheet.event_idx = sheet.event_idx.saturating_sub(1);
                self.mode = UiMode::Sheet(sheet);
            }
            KeyCode::Right => {
                sheet.event_idx = (sheet.event_idx + 1).min(m.events.len().saturating_sub(1));
                self.mode = UiMode::Sheet(sheet);
            }
            KeyCode::Enter => {
                if let Some(player) = self.state.players.get(sheet.player_idx) {
                    let intent = Intent::AddMatchEvent {
                        match_id: sheet.match_id.clone(),
                        player_id: player.id.clone(),
                        kind: sheet.kind,
                    };
                    self.apply(intent);
                }
                self.mode = UiMode::Sheet(sheet);
            }
            KeyCode::Char('x') => {
                if let Some(event) = m.events.get(sheet.event_idx) {
                    let intent = Intent::RemoveMatchEvent {
                        match_id: sheet.match_id.clone(),
                        event_id: event.id.clone(),
                    };
                    self.apply(intent);
                }
                sheet.event_idx = sheet.event_idx.saturating_sub(1);
                self.mode = UiMode::Sheet(sheet);
            }
            _ => self.mode = UiMode::Sheet(sheet),
        }
    }

    fn open_new_form(&mut self) {
        match self.state.active_tab {
            Tab::Squad => self.mode = UiMode::Form(player_form(None, &self.state)),
            Tab::Matches => self.mode = UiMode::Form(match_form(None)),
            Tab::Finance => self.mode = UiMode::Form(transaction_form()),
            Tab::Table => self.mode = UiMode::Form(league_form(None)),
            Tab::Gallery => self.mode = UiMode::Form(gallery_form()),
            _ => {}
        }
    }

    fn open_edit_form(&mut self) {
        match self.state.active_tab {
            Tab::Squad => {
                if let Some(player) = self.state.selected_player() {
                    self.mode = UiMode::Form(player_form(Some(player.id.clone()), &self.state));
                }
            }
            Tab::Matches => {
                if let Some(m) = self.state.selected_match() {
                    let id = m.id.clone();
                    let filled = match_form_from(m);
                    self.mode = UiMode::Form(FormState {
                        kind: FormKind::Match { editing: Some(id) },
                        title: "Editar Jogo".to_string(),
                        ..filled
                    });
                }
            }
            Tab::Table => {
                if let Some(entry) = self.state.league_entries.get(self.state.selected) {
                    self.mode = UiMode::Form(league_form(Some(entry.clone())));
                }
            }
            _ => {}
        }
    }

    fn request_delete(&mut self) {
        match self.state.active_tab {
            Tab::Table => {
                if let Some(entry) = self.state.league_entries.get(self.state.selected) {
                    let entry_id = entry.id.clone();
                    self.apply(Intent::DeleteLeagueEntry { entry_id });
                }
            }
            Tab::Gallery => {
                if let Some(image) = self.state.gallery.get(self.state.selected) {
                    let image_id = image.id.clone();
                    self.apply(Intent::DeleteGalleryImage { image_id });
                }
            }
            _ => {}
        }
    }

    fn quick_status(&mut self, status: MatchStatus) {
        if let Some(m) = self.state.selected_match() {
            let match_id = m.id.clone();
            self.apply(Intent::UpdateMatchStatus { match_id, status });
        }
    }

    fn toggle_presence(&mut self, attending: bool) {
        let Some(next) = derived::next_match(&self.state.matches) else {
            self.state.push_log("[INFO] Nenhum jogo agendado");
            return;
        };
        let match_id = next.id.clone();
        let Some(player) = self.state.players.get(self.state.selected) else {
            return;
        };
        let player_id = player.id.clone();
        self.apply(Intent::TogglePresence {
            match_id,
            player_id,
            attending,
        });
    }

    fn nudge(&mut self, dx: f32, dy: f32) {
        let idx = self.state.selected;
        self.apply(Intent::NudgeMarker { idx, dx, dy });
    }

    fn request_advice(&mut self) {
        let Some(tx) = &self.cmd_tx else {
            self.state.push_log("[WARN] Análise tática indisponível");
            return;
        };
        let Some(next) = derived::next_match(&self.state.matches) else {
            self.state.push_log("[INFO] Nenhum jogo agendado para analisar");
            return;
        };
        let players_summary = self
            .state
            .players
            .iter()
            .map(|p| format!("{} ({})", p.nickname, p.position.label()))
            .collect::<Vec<_>>()
            .join(", ");
        let cmd = AdvisorCommand::TacticalAdvice {
            players_summary,
            opponent: next.opponent.clone(),
        };
        if tx.send(cmd).is_ok() {
            self.state.advice_loading = true;
            self.state.push_log("[INFO] Análise tática solicitada");
        } else {
            self.state.push_log("[WARN] Falha ao solicitar análise");
        }
    }

    fn request_report(&mut self) {
        let Some(tx) = &self.cmd_tx else {
            self.state.push_log("[WARN] Crônica indisponível");
            return;
        };
        let Some(last) = derived::last_match(&self.state.matches) else {
            self.state.push_log("[INFO] Nenhum jogo finalizado");
            return;
        };
        let cmd = AdvisorCommand::MatchReport {
            opponent: last.opponent.clone(),
            score_home: last.score_home,
            score_away: last.score_away,
        };
        if tx.send(cmd).is_ok() {
            self.state.report_loading = true;
            self.state.push_log("[INFO] Crônica solicitada");
        } else {
            self.state.push_log("[WARN] Falha ao solicitar crônica");
        }
    }

    fn share_app(&mut self) {
        let url = share::share_url();
        let message = share::share_message(&self.state.team_name, &url);
        for line in message.lines() {
            let line = line.to_string();
            self.state.push_log(format!("[INFO] {line}"));
        }
        // The fetch can stall for the full client timeout, so it runs off
        // the event loop and reports back through the intent channel.
        self.state.push_log("[INFO] Gerando QR em segundo plano");
        share::spawn_qr_saver(self.intent_tx.clone(), url);
    }

    fn export_workbook(&mut self) {
        if !self.state.is_admin {
            return;
        }
        let path = Path::new("arena_export.xlsx");
        match export::export_workbook(
            path,
            &self.state.league_entries,
            &self.state.transactions,
            &self.state.players,
        ) {
            Ok(report) => self.state.push_log(format!(
                "[INFO] Exportado {}: {} equipes, {} lançamentos, {} atletas",
                path.display(),
                report.entries,
                report.transactions,
                report.players
            )),
            Err(err) => self.state.push_log(format!("[WARN] Exportação falhou: {err}")),
        }
    }

    fn submit_form(&mut self, form: FormState) {
        match form.kind.clone() {
            FormKind::Player { editing } => {
                let draft = PlayerDraft {
                    name: non_empty(form.field("Nome Completo")),
                    nickname: non_empty(form.field("Apelido")),
                    number: parse_num(&form.field("Nº")),
                    position: Position::parse(&form.field("Posição")),
                    photo: self.encode_optional_image(&form.field("Foto (arquivo)")),
                };
                self.apply(Intent::SavePlayer { editing, draft });
            }
            FormKind::Match { editing } => {
                let draft = MatchDraft {
                    opponent: non_empty(form.field("Adversário")),
                    opponent_logo: self.encode_optional_image(&form.field("Escudo (arquivo)")),
                    date: non_empty(form.field("Data e Hora")),
                    location: non_empty(form.field("Local")),
                    status: MatchStatus::parse(&form.field("Status")),
                    score_home: parse_num(&form.field("Placar Casa")),
                    score_away: parse_num(&form.field("Placar Visitante")),
                };
                self.apply(Intent::SaveMatch { editing, draft });
            }
            FormKind::Transaction => {
                let kind = match form.field("Tipo").to_lowercase() {
                    ref t if t.starts_with("desp") => TransactionKind::Expense,
                    _ => TransactionKind::Income,
                };
                // Sign is forced to agree with the type at capture time.
                let amount = form.field("Valor").parse::<f64>().unwrap_or(0.0).abs();
                let amount = match kind {
                    TransactionKind::Income => amount,
                    TransactionKind::Expense => -amount,
                };
                let draft = TransactionDraft {
                    description: non_empty(form.field("Descrição")),
                    amount: Some(amount),
                    date: non_empty(form.field("Data")),
                    kind: Some(kind),
                    category: non_empty(form.field("Categoria")),
                };
                self.apply(Intent::SaveTransaction { draft });
            }
            FormKind::League { editing } => {
                let draft = LeagueEntryDraft {
                    team_name: non_empty(form.field("Equipe")),
                    logo: self.encode_optional_image(&form.field("Escudo (arquivo)")),
                    wins: parse_num(&form.field("Vitórias")),
                    draws: parse_num(&form.field("Empates")),
                    losses: parse_num(&form.field("Derrotas")),
                    goals_for: parse_num(&form.field("Gols Pró")),
                    goals_against: parse_num(&form.field("Gols Contra")),
                    yellow_cards: parse_num(&form.field("Cartões Amarelos")),
                    red_cards: parse_num(&form.field("Cartões Vermelhos")),
                };
                self.apply(Intent::SaveLeagueEntry { editing, draft });
            }
            FormKind::LeagueName => {
                let name = form.field("Nome");
                if !name.is_empty() {
                    self.apply(Intent::SetLeagueName { name });
                }
            }
            FormKind::Gallery => {
                let path = form.field("Imagem (arquivo)");
                match photo::encode_image_file(Path::new(&path)) {
                    Ok(data) => {
                        let caption = non_empty(form.field("Legenda"));
                        self.apply(Intent::AddGalleryImage { data, caption });
                    }
                    Err(err) => self.state.push_log(format!("[WARN] Imagem inválida: {err}")),
                }
            }
        }
    }

    fn encode_optional_image(&mut self, path: &str) -> Option<String> {
        if path.is_empty() {
            return None;
        }
        match photo::encode_image_file(Path::new(path)) {
            Ok(data) => Some(data),
            Err(err) => {
                self.state.push_log(format!("[WARN] Imagem ignorada: {err}"));
                None
            }
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Numeric coercion mirrors the editors: absent stays absent, malformed
/// becomes the zero default.
fn parse_num<T: std::str::FromStr + Default>(raw: &str) -> Option<T> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(raw.trim().parse::<T>().unwrap_or_default())
}

fn player_form(editing: Option<String>, state: &AppState) -> FormState {
    let existing = editing
        .as_ref()
        .and_then(|id| state.players.iter().find(|p| p.id == *id));
    let title = if existing.is_some() {
        "Editar Atleta"
    } else {
        "Novo Atleta"
    };
    let field = |label, value: String| FormField { label, value };
    FormState {
        kind: FormKind::Player { editing },
        title: title.to_string(),
        fields: vec![
            field(
                "Nome Completo",
                existing.map(|p| p.name.clone()).unwrap_or_default(),
            ),
            field(
                "Apelido",
                existing.map(|p| p.nickname.clone()).unwrap_or_default(),
            ),
            field(
                "Nº",
                existing.map(|p| p.number.to_string()).unwrap_or_default(),
            ),
            field(
                "Posição",
                existing
                    .map(|p| p.position.label().to_string())
                    .unwrap_or_default(),
            ),
            field("Foto (arquivo)", String::new()),
        ],
        selected: 0,
    }
}

fn match_form(editing: Option<String>) -> FormState {
    FormState {
        kind: FormKind::Match { editing },
        title: "Agendar Partida".to_string(),
        fields: vec![
            FormField {
                label: "Adversário",
                value: String::new(),
            },
            FormField {
                label: "Data e Hora",
                value: String::new(),
            },
            FormField {
                label: "Local",
                value: String::new(),
            },
            FormField {
                label: "Status",
                value: MatchStatus::Agendado.label().to_string(),
            },
            FormField {
                label: "Placar Casa",
                value: String::new(),
            },
            FormField {
                label: "Placar Visitante",
                value: String::new(),
            },
            FormField {
                label: "Escudo (arquivo)",
                value: String::new(),
            },
        ],
        selected: 0,
    }
}

fn match_form_from(m: &Match) -> FormState {
    let mut form = match_form(None);
    for field in &mut form.fields {
        field.value = match field.label {
            "Adversário" => m.opponent.clone(),
            "Data e Hora" => m.date.clone(),
            "Local" => m.location.clone(),
            "Status" => m.status.label().to_string(),
            "Placar Casa" => m.score_home.to_string(),
            "Placar Visitante" => m.score_away.to_string(),
            _ => String::new(),
        };
    }
    form
}

fn transaction_form() -> FormState {
    FormState {
        kind: FormKind::Transaction,
        title: "Novo Lançamento".to_string(),
        fields: vec![
            FormField {
                label: "Descrição",
                value: String::new(),
            },
            FormField {
                label: "Valor",
                value: String::new(),
            },
            FormField {
                label: "Data",
                value: String::new(),
            },
            FormField {
                label: "Tipo",
                value: TransactionKind::Income.label().to_string(),
            },
            FormField {
                label: "Categoria",
                value: String::new(),
            },
        ],
        selected: 0,
    }
}

fn league_form(existing: Option<arena_terminal::model::LeagueEntry>) -> FormState {
    let title = if existing.is_some() {
        "Editar Equipe"
    } else {
        "Nova Equipe na Liga"
    };
    let editing = existing.as_ref().map(|e| e.id.clone());
    let num = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();
    let e = existing.as_ref();
    FormState {
        kind: FormKind::League { editing },
        title: title.to_string(),
        fields: vec![
            FormField {
                label: "Equipe",
                value: e.map(|x| x.team_name.clone()).unwrap_or_default(),
            },
            FormField {
                label: "Vitórias",
                value: num(e.map(|x| x.wins)),
            },
            FormField {
                label: "Empates",
                value: num(e.map(|x| x.draws)),
            },
            FormField {
                label: "Derrotas",
                value: num(e.map(|x| x.losses)),
            },
            FormField {
                label: "Gols Pró",
                value: num(e.map(|x| x.goals_for)),
            },
            FormField {
                label: "Gols Contra",
                value: num(e.map(|x| x.goals_against)),
            },
            FormField {
                label: "Cartões Amarelos",
                value: num(e.map(|x| x.yellow_cards)),
            },
            FormField {
                label: "Cartões Vermelhos",
                value: num(e.map(|x| x.red_cards)),
            },
            FormField {
                label: "Escudo (arquivo)",
                value: String::new(),
            },
        ],
        selected: 0,
    }
}

fn gallery_form() -> FormState {
    FormState {
        kind: FormKind::Gallery,
        title: "Nova Imagem".to_string(),
        fields: vec![
            FormField {
                label: "Imagem (arquivo)",
                value: String::new(),
            },
            FormField {
                label: "Legenda",
                value: String::new(),
            },
        ],
        selected: 0,
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    advisor::spawn_advisor(tx.clone(), cmd_rx);

    let mut app = App::new(tx.clone(), Some(cmd_tx));
    offline_cache::spawn_precache(tx.clone());

    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Intent>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(intent) = rx.try_recv() {
            apply_intent(&mut app.state, intent);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.active_tab {
        Tab::Home => render_home(frame, chunks[1], &app.state),
        Tab::Squad => render_squad(frame, chunks[1], &app.state),
        Tab::Matches => render_matches(frame, chunks[1], &app.state),
        Tab::Presence => render_presence(frame, chunks[1], &app.state),
        Tab::Table => render_table(frame, chunks[1], &app.state),
        Tab::Finance => render_finance(frame, chunks[1], &app.state),
        Tab::Tactics => render_tactics(frame, chunks[1], &app.state),
        Tab::Gallery => render_gallery(frame, chunks[1], &app.state),
    }

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(app)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[3]);

    match &app.mode {
        UiMode::Login { input } => render_login_overlay(frame, frame.size(), &app.state, input),
        UiMode::Form(form) => render_form_overlay(frame, frame.size(), form),
        UiMode::Sheet(sheet) => render_sheet_overlay(frame, frame.size(), &app.state, sheet),
        UiMode::Browse => {}
    }

    if let Some(pending) = &app.state.pending {
        render_confirm_overlay(frame, frame.size(), pending.prompt());
    }

    if app.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let tabs = Tab::ALL
        .iter()
        .enumerate()
        .map(|(idx, tab)| {
            if *tab == state.active_tab {
                format!("[{} {}]", idx + 1, tab.label())
            } else {
                format!(" {} {} ", idx + 1, tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join("");
    let badge = if state.is_admin { " ADMIN" } else { "" };
    format!("{}{badge}\n{tabs}", state.team_name.to_uppercase())
}

fn footer_text(app: &App) -> String {
    match &app.mode {
        UiMode::Login { .. } => "Digite a senha | Enter Confirmar | Esc Cancelar".to_string(),
        UiMode::Form(_) => {
            "Tab/↑/↓ Campo | Enter Salvar | Esc Cancelar".to_string()
        }
        UiMode::Sheet(_) => {
            "t Tipo | j/k Atleta | Enter Adicionar | ←/→ Evento | x Remover | Esc Voltar"
                .to_string()
        }
        UiMode::Browse => match app.state.active_tab {
            Tab::Home => "g Análise | r Crônica | S Compartilhar | a Admin | ? Ajuda | q Sair"
                .to_string(),
            Tab::Squad => "n Novo | e Editar | j/k Mover | a Admin | q Sair".to_string(),
            Tab::Matches => {
                "n Novo | e Editar | Enter Ficha | F/C/A Status | j/k Mover | q Sair".to_string()
            }
            Tab::Presence => "y Vou | x Não vou | j/k Mover | q Sair".to_string(),
            Tab::Table => "n Nova Equipe | e Editar | d Remover | r Renomear | X Exportar | q Sair"
                .to_string(),
            Tab::Finance => "n Lançamento | p Mensalidade | j/k Mover | X Exportar | q Sair"
                .to_string(),
            Tab::Tactics => "f Formação | j/k Marcador | ←/→/u/m Mover | 0 Padrão | q Sair"
                .to_string(),
            Tab::Gallery => "n Nova Imagem | d Remover | j/k Mover | q Sair".to_string(),
        },
    }
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "Sem avisos".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_home(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(7),
            Constraint::Min(5),
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(rows[0]);

    let athletes = Paragraph::new(format!("{}", state.players.len()))
        .block(Block::default().title("Atletas").borders(Borders::ALL));
    frame.render_widget(athletes, cards[0]);

    let campaign = standings::campaign(&state.league_entries, &state.team_name);
    let campaign_text = match campaign {
        Some(entry) => format!("{}V {}E {}D", entry.wins, entry.draws, entry.losses),
        None => "0V 0E 0D".to_string(),
    };
    let campaign_widget = Paragraph::new(campaign_text)
        .block(Block::default().title("Campanha").borders(Borders::ALL));
    frame.render_widget(campaign_widget, cards[1]);

    let confirmed = derived::next_match(&state.matches)
        .map(|m| m.players_confirmed.len())
        .unwrap_or(0);
    let confirmed_widget = Paragraph::new(format!("{confirmed}"))
        .block(Block::default().title("Confirmados Jogo").borders(Borders::ALL));
    frame.render_widget(confirmed_widget, cards[2]);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let last = match derived::last_match(&state.matches) {
        Some(m) => match_card_text(state, m),
        None => "Nenhum jogo finalizado.".to_string(),
    };
    let last_widget = Paragraph::new(last)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Último Resultado").borders(Borders::ALL));
    frame.render_widget(last_widget, halves[0]);

    let next = match derived::next_match(&state.matches) {
        Some(m) => match_card_text(state, m),
        None => "Nenhum jogo agendado.".to_string(),
    };
    let next_widget = Paragraph::new(next)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Próximo Compromisso").borders(Borders::ALL));
    frame.render_widget(next_widget, halves[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    render_leaderboard_chart(frame, bottom[0], state);

    let advice = if state.advice_loading {
        "Analisando...".to_string()
    } else {
        state
            .advice
            .clone()
            .or_else(|| state.report.clone())
            .unwrap_or_else(|| "g Análise tática / r Crônica do jogo".to_string())
    };
    let advice_widget = Paragraph::new(advice)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Comissão Técnica").borders(Borders::ALL));
    frame.render_widget(advice_widget, bottom[1]);
}

fn match_card_text(state: &AppState, m: &Match) -> String {
    let score = if m.is_completed {
        format!("{} {} x {} {}", state.team_name, m.score_home, m.score_away, m.opponent)
    } else {
        format!("{} vs {}", state.team_name, m.opponent)
    };
    format!(
        "{score}\n{}\n{} | {}",
        m.status.label(),
        derived::format_date(&m.date),
        m.location
    )
}

fn render_leaderboard_chart(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Artilharia").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let rows = derived::leaderboard(&state.players);
    let bars: Vec<Bar> = rows
        .iter()
        .take(6)
        .map(|(player, goals, _)| {
            Bar::default()
                .value(u64::from(*goals))
                .label(player.nickname.clone().into())
                .style(Style::default().fg(Color::Green))
        })
        .collect();
    if bars.is_empty() {
        frame.render_widget(Paragraph::new("Sem atletas"), inner);
        return;
    }

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0);
    frame.render_widget(chart, inner);
}

fn render_squad(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![format!(
        "{:<3} {:<20} {:<12} {:<12} {:>4} {:>4} {:>5} {:>5}",
        "Nº", "Nome", "Apelido", "Posição", "G", "A", "J", "Nota"
    )];
    for player in &state.players {
        lines.push(format!(
            "{:<3} {:<20} {:<12} {:<12} {:>4} {:>4} {:>5} {:>5.1}{}",
            player.number,
            truncate(&player.name, 20),
            truncate(&player.nickname, 12),
            player.position.label(),
            player.goals,
            player.assists,
            player.games_played,
            player.rating,
            if player.photo.is_some() { " 📷" } else { "" },
        ));
    }
    render_selectable_list(frame, area, "Elenco", &lines, state.selected);
}

fn render_matches(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![format!(
        "{:<22} {:<18} {:<18} {:<11} {:>7}",
        "Adversário", "Data", "Local", "Status", "Placar"
    )];
    for m in &state.matches {
        let score = if m.is_completed {
            format!("{}-{}", m.score_home, m.score_away)
        } else {
            "--".to_string()
        };
        lines.push(format!(
            "{:<22} {:<18} {:<18} {:<11} {:>7}",
            truncate(&m.opponent, 22),
            derived::format_date(&m.date),
            truncate(&m.location, 18),
            m.status.label(),
            score,
        ));
    }
    render_selectable_list(frame, area, "Jogos", &lines, state.selected);
}

fn render_presence(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(next) = derived::next_match(&state.matches) else {
        let empty = Paragraph::new("Nenhum jogo agendado.")
            .block(Block::default().title("Presença").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let title = format!(
        "Presença: vs {} • {} • {}",
        next.opponent,
        truncate(&next.location, 18),
        derived::format_date(&next.date)
    );
    let mut lines = Vec::new();
    for player in &state.players {
        let mark = if next.players_confirmed.contains(&player.id) {
            "SIM"
        } else if next.players_declined.contains(&player.id) {
            "NÃO"
        } else {
            "---"
        };
        lines.push(format!("{:<16} {}", truncate(&player.nickname, 16), mark));
    }
    render_selectable_list_offset(frame, area, &title, &lines, state.selected, 0);
}

fn render_table(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![format!(
        "{:<4} {:<18} {:>3} {:>4} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>3} {:>3} {:>7}",
        "Pos", "Equipe", "J", "Pts", "V", "E", "D", "GP", "GC", "SG", "CA", "CV", "Aprov %"
    )];
    let ordered = standings::sorted(&state.league_entries);
    let ours = standings::campaign(&state.league_entries, &state.team_name).map(|e| e.id.clone());
    for (idx, entry) in ordered.iter().enumerate() {
        let marker = if ours.as_deref() == Some(entry.id.as_str()) {
            "▶"
        } else {
            " "
        };
        lines.push(format!(
            "{marker}{:<3} {:<18} {:>3} {:>4} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>3} {:>3} {:>6}%",
            idx + 1,
            truncate(&entry.team_name, 18),
            entry.games,
            entry.points,
            entry.wins,
            entry.draws,
            entry.losses,
            entry.goals_for,
            entry.goals_against,
            entry.goal_difference(),
            entry.yellow_cards,
            entry.red_cards,
            standings::aproveitamento(entry),
        ));
    }
    // Row selection follows collection order, not display order.
    let selected_line = state
        .league_entries
        .get(state.selected)
        .and_then(|sel| ordered.iter().position(|e| e.id == sel.id))
        .unwrap_or(0);
    let title = format!("{} — Classificação Oficial", state.league_name);
    render_selectable_list_offset(frame, area, &title, &lines[..], selected_line + 1, 1);
}

fn render_finance(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4 + state.players.len() as u16 / 2),
            Constraint::Min(3),
        ])
        .split(area);

    let balance = derived::balance(&state.transactions);
    let style = if balance >= 0.0 {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };
    let balance_widget = Paragraph::new(format!("R$ {balance:.2}"))
        .style(style)
        .block(Block::default().title("Saldo em Caixa").borders(Borders::ALL));
    frame.render_widget(balance_widget, rows[0]);

    let mut dues = Vec::new();
    for (idx, player) in state.players.iter().enumerate() {
        let mark = if player.is_paid { "✓" } else { "✗" };
        let cursor = if idx == state.selected { ">" } else { " " };
        dues.push(format!(
            "{cursor}{} {mark}",
            truncate(&player.nickname, 14)
        ));
    }
    let dues_widget = Paragraph::new(dues.join("  "))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Mensalidades (Mês Atual)")
                .borders(Borders::ALL),
        );
    frame.render_widget(dues_widget, rows[1]);

    let mut lines = vec![format!(
        "{:<12} {:<28} {:<14} {:>10}",
        "Data", "Descrição", "Categoria", "Valor"
    )];
    for t in &state.transactions {
        lines.push(format!(
            "{:<12} {:<28} {:<14} {:>10.2}",
            t.date,
            truncate(&t.description, 28),
            truncate(&t.category, 14),
            t.amount,
        ));
    }
    let ledger = Paragraph::new(lines.join("\n"))
        .block(Block::default().title("Lançamentos").borders(Borders::ALL));
    frame.render_widget(ledger, rows[2]);
}

fn render_tactics(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(
        "Tática {} {}",
        state.board.formation.label(),
        if state.board.has_custom() {
            "(personalizada)"
        } else {
            "(padrão)"
        }
    );
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 8 || inner.height < 6 {
        return;
    }

    // Midfield line.
    let mid_y = inner.y + inner.height / 2;
    let line = "─".repeat(inner.width as usize);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        Rect {
            x: inner.x,
            y: mid_y,
            width: inner.width,
            height: 1,
        },
    );

    let positions = state.board.positions();
    for (idx, (left, top)) in positions.iter().enumerate() {
        let Some(player) = state.players.get(idx) else {
            break;
        };
        let x = inner.x + ((left / 100.0) * (inner.width.saturating_sub(6)) as f32) as u16;
        let y = inner.y + ((top / 100.0) * (inner.height.saturating_sub(1)) as f32) as u16;
        let marker = format!("{:>2} {}", player.number, truncate(&player.nickname, 8));
        let style = if idx == state.selected {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        let cell = Rect {
            x,
            y,
            width: (marker.chars().count() as u16).min(inner.width.saturating_sub(x - inner.x)),
            height: 1,
        };
        frame.render_widget(Paragraph::new(marker).style(style), cell);
    }
}

fn render_gallery(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.gallery.is_empty() {
        let empty = Paragraph::new("Nenhuma imagem. 'n' adiciona a partir de um arquivo.")
            .block(Block::default().title("Galeria").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }
    let mut lines = Vec::new();
    for image in &state.gallery {
        lines.push(format!(
            "{:<12} {:<30} {} bytes",
            image.date,
            truncate(image.caption.as_deref().unwrap_or("(sem legenda)"), 30),
            image.data.len(),
        ));
    }
    render_selectable_list_offset(frame, area, "Galeria", &lines, state.selected, 0);
}

fn render_selectable_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: &[String],
    selected: usize,
) {
    // First line is a header row.
    render_selectable_list_offset(frame, area, title, lines, selected + 1, 1);
}

fn render_selectable_list_offset(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: &[String],
    selected_line: usize,
    header_rows: usize,
) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let visible = inner.height as usize;
    let total = lines.len();
    let mut start = 0usize;
    if total > visible && selected_line >= visible {
        start = (selected_line + 1).saturating_sub(visible);
    }
    for (row, idx) in (start..total.min(start + visible)).enumerate() {
        let style = if idx == selected_line && idx >= header_rows {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else if idx < header_rows {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cell = Rect {
            x: inner.x,
            y: inner.y + row as u16,
            width: inner.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(lines[idx].clone()).style(style), cell);
    }
}

fn render_login_overlay(frame: &mut Frame, area: Rect, state: &AppState, input: &str) {
    let popup = centered_rect(40, 20, area);
    frame.render_widget(Clear, popup);
    let masked = "*".repeat(input.chars().count());
    let text = if state.login_error {
        format!("{masked}\n\nSenha incorreta")
    } else {
        masked
    };
    let style = if state.login_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let widget = Paragraph::new(text).style(style).block(
        Block::default()
            .title("Acesso Administrativo")
            .borders(Borders::ALL),
    );
    frame.render_widget(widget, popup);
}

fn render_form_overlay(frame: &mut Frame, area: Rect, form: &FormState) {
    let popup = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup);
    let mut lines = Vec::new();
    for (idx, field) in form.fields.iter().enumerate() {
        let cursor = if idx == form.selected { "> " } else { "  " };
        lines.push(format!("{cursor}{}: {}", field.label, field.value));
    }
    if matches!(form.kind, FormKind::Transaction) {
        lines.push(String::new());
        lines.push(format!("Categorias: {}", TRANSACTION_CATEGORIES.join(", ")));
    }
    let widget = Paragraph::new(lines.join("\n")).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(form.title.clone())
            .borders(Borders::ALL),
    );
    frame.render_widget(widget, popup);
}

fn render_sheet_overlay(frame: &mut Frame, area: Rect, state: &AppState, sheet: &SheetState) {
    let popup = centered_rect(70, 80, area);
    frame.render_widget(Clear, popup);
    let Some(m) = state.match_by_id(&sheet.match_id) else {
        return;
    };

    let mut lines = vec![
        format!(
            "Mandante {} x {} {}",
            m.score_home, m.score_away, m.opponent
        ),
        String::new(),
        format!("Evento: {}", sheet.kind.label()),
        String::new(),
        "Atletas:".to_string(),
    ];
    for (idx, player) in state.players.iter().enumerate() {
        let cursor = if idx == sheet.player_idx { "> " } else { "  " };
        lines.push(format!("{cursor}{} (#{})", player.nickname, player.number));
    }
    lines.push(String::new());
    if m.events.is_empty() {
        lines.push("Nenhum evento registrado.".to_string());
    } else {
        lines.push("Eventos:".to_string());
        for (idx, event) in m.events.iter().enumerate() {
            let cursor = if idx == sheet.event_idx { "> " } else { "  " };
            lines.push(format!(
                "{cursor}{} — {}",
                event.kind.label(),
                state.player_nickname(&event.player_id)
            ));
        }
    }

    let widget = Paragraph::new(lines.join("\n")).block(
        Block::default()
            .title("Ficha Técnica")
            .borders(Borders::ALL),
    );
    frame.render_widget(widget, popup);
}

fn render_confirm_overlay(frame: &mut Frame, area: Rect, prompt: &str) {
    let popup = centered_rect(40, 20, area);
    frame.render_widget(Clear, popup);
    let widget = Paragraph::new(format!("{prompt}\n\n[s] Sim   [qualquer tecla] Não")).block(
        Block::default()
            .title("Confirmação")
            .borders(Borders::ALL),
    );
    frame.render_widget(widget, popup);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup);

    let text = [
        "Arena Terminal — Ajuda",
        "",
        "Global:",
        "  1-8 / Tab    Abas",
        "  j/k ou ↑/↓   Mover seleção",
        "  a            Entrar/sair do modo admin",
        "  S            Compartilhar (texto + QR)",
        "  X            Exportar planilha (admin)",
        "  ?            Ajuda",
        "  q            Sair",
        "",
        "Por aba:",
        "  Painel:   g análise tática, r crônica",
        "  Jogos:    n novo, e editar, Enter ficha técnica, F/C/A status",
        "  Presença: y vou, x não vou",
        "  Tabela:   n nova equipe, e editar, d remover, r renomear",
        "  Caixa:    n lançamento, p mensalidade",
        "  Tática:   f formação, ←/→/u/m mover marcador, 0 padrão",
        "  Galeria:  n nova imagem, d remover",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Ajuda").borders(Borders::ALL));
    frame.render_widget(help, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

fn truncate(raw: &str, max: usize) -> String {
    if raw.chars().count() <= max {
        raw.to_string()
    } else {
        raw.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
    }
}
