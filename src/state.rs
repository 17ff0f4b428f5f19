use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;

use crate::advisor::AdvisorKind;
use crate::model::{
    EventKind, GalleryImage, LeagueEntry, Match, MatchEvent, MatchStatus, Player, Position,
    Transaction, TransactionKind,
};
use crate::seed;
use crate::standings;
use crate::tactics::TacticalBoard;

/// Process-wide monotonic id source. Seed data is stamped through the same
/// counter, so ids handed out later can never collide with seeded ones.
#[derive(Debug, Default)]
pub struct IdGen {
    next: AtomicU64,
}

impl IdGen {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    pub fn next(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}{n}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Squad,
    Matches,
    Presence,
    Table,
    Finance,
    Tactics,
    Gallery,
}

impl Tab {
    pub const ALL: [Tab; 8] = [
        Tab::Home,
        Tab::Squad,
        Tab::Matches,
        Tab::Presence,
        Tab::Table,
        Tab::Finance,
        Tab::Tactics,
        Tab::Gallery,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Painel",
            Tab::Squad => "Elenco",
            Tab::Matches => "Jogos",
            Tab::Presence => "Presença",
            Tab::Table => "Tabela",
            Tab::Finance => "Financeiro",
            Tab::Tactics => "Tática",
            Tab::Gallery => "Galeria",
        }
    }
}

/// Destructive actions armed behind the yes/no overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteLeagueEntry { entry_id: String },
    DeleteGalleryImage { image_id: String },
}

impl PendingAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingAction::DeleteLeagueEntry { .. } => "Deseja remover esta equipe?",
            PendingAction::DeleteGalleryImage { .. } => "Deseja remover esta imagem?",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerDraft {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub number: Option<u32>,
    pub position: Option<Position>,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchDraft {
    pub opponent: Option<String>,
    pub opponent_logo: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub status: Option<MatchStatus>,
    pub score_home: Option<u8>,
    pub score_away: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDraft {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueEntryDraft {
    pub team_name: Option<String>,
    pub logo: Option<String>,
    pub wins: Option<u32>,
    pub draws: Option<u32>,
    pub losses: Option<u32>,
    pub goals_for: Option<u32>,
    pub goals_against: Option<u32>,
    pub yellow_cards: Option<u32>,
    pub red_cards: Option<u32>,
}

/// Every mutation funnels through here; views only ever emit these.
#[derive(Debug, Clone)]
pub enum Intent {
    Login { pin: String },
    Logout,
    SavePlayer { editing: Option<String>, draft: PlayerDraft },
    TogglePayment { player_id: String },
    SaveMatch { editing: Option<String>, draft: MatchDraft },
    UpdateMatchStatus { match_id: String, status: MatchStatus },
    TogglePresence { match_id: String, player_id: String, attending: bool },
    AddMatchEvent { match_id: String, player_id: String, kind: EventKind },
    RemoveMatchEvent { match_id: String, event_id: String },
    SaveTransaction { draft: TransactionDraft },
    SaveLeagueEntry { editing: Option<String>, draft: LeagueEntryDraft },
    DeleteLeagueEntry { entry_id: String },
    SetLeagueName { name: String },
    AddGalleryImage { data: String, caption: Option<String> },
    DeleteGalleryImage { image_id: String },
    ConfirmPending,
    CancelPending,
    NudgeMarker { idx: usize, dx: f32, dy: f32 },
    AdvisorResult { kind: AdvisorKind, text: String },
    Log(String),
}

#[derive(Debug)]
pub struct AppState {
    pub ids: IdGen,

    pub team_name: String,
    pub team_logo: Option<String>,
    pub league_name: String,
    admin_pin: String,

    pub players: Vec<Player>,
    pub matches: Vec<Match>,
    pub transactions: Vec<Transaction>,
    pub league_entries: Vec<LeagueEntry>,
    pub gallery: Vec<GalleryImage>,
    pub board: TacticalBoard,

    pub is_admin: bool,
    pub login_error: bool,
    pub active_tab: Tab,
    pub selected: usize,
    pub pending: Option<PendingAction>,
    pub logs: VecDeque<String>,

    pub advice: Option<String>,
    pub advice_loading: bool,
    pub report: Option<String>,
    pub report_loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let team_name = env_or("ARENA_TEAM_NAME", "Boa Vista FC");
        let league_name = env_or("ARENA_LEAGUE_NAME", "Chave A");
        let admin_pin = env_or("ARENA_ADMIN_PIN", "2024");

        let ids = IdGen::new();
        let players = seed::seed_players(&ids);
        let matches = seed::seed_matches(&ids, &players);
        let transactions = seed::seed_transactions(&ids);
        let league_entries = seed::seed_league_entries(&ids);

        Self {
            ids,
            team_name,
            team_logo: None,
            league_name,
            admin_pin,
            players,
            matches,
            transactions,
            league_entries,
            gallery: Vec::new(),
            board: TacticalBoard::new(),
            is_admin: false,
            login_error: false,
            active_tab: Tab::Home,
            selected: 0,
            pending: None,
            logs: VecDeque::with_capacity(200),
            advice: None,
            advice_loading: false,
            report: None,
            report_loading: false,
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.selected = 0;
    }

    /// How many selectable rows the active tab shows.
    pub fn tab_rows(&self) -> usize {
        match self.active_tab {
            Tab::Home => 0,
            // Finance selects athletes for the monthly-dues toggle.
            Tab::Squad | Tab::Presence | Tab::Finance => self.players.len(),
            Tab::Matches => self.matches.len(),
            Tab::Table => self.league_entries.len(),
            Tab::Tactics => self.board.positions().len().min(self.players.len().max(1)),
            Tab::Gallery => self.gallery.len(),
        }
    }

    pub fn select_next(&mut self) {
        let total = self.tab_rows();
        if total == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.tab_rows();
        if total == 0 {
            self.selected = 0;
            return;
        }
        if self.selected == 0 {
            self.selected = total - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn clamp_selection(&mut self) {
        let total = self.tab_rows();
        if total == 0 {
            self.selected = 0;
        } else if self.selected >= total {
            self.selected = total - 1;
        }
    }

    pub fn selected_player(&self) -> Option<&Player> {
        self.players.get(self.selected)
    }

    pub fn selected_match(&self) -> Option<&Match> {
        self.matches.get(self.selected)
    }

    pub fn match_by_id(&self, id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn player_nickname(&self, id: &str) -> &str {
        self.players
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.nickname.as_str())
            .unwrap_or("Atleta")
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

fn now_datetime() -> String {
    Local::now().format("%Y-%m-%dT%H:%M").to_string()
}

pub fn apply_intent(state: &mut AppState, intent: Intent) {
    match intent {
        Intent::Login { pin } => {
            if pin == state.admin_pin {
                state.is_admin = true;
                state.login_error = false;
                state.push_log("[INFO] Modo administrador ativado");
            } else {
                state.login_error = true;
            }
        }
        Intent::Logout => {
            state.is_admin = false;
            state.push_log("[INFO] Sessão de administrador encerrada");
        }

        Intent::SavePlayer { editing, draft } => {
            if !state.is_admin {
                return;
            }
            match editing.and_then(|id| state.players.iter_mut().find(|p| p.id == id)) {
                Some(player) => {
                    // Merge: supplied fields overwrite, counters stay.
                    if let Some(name) = draft.name {
                        player.name = name;
                    }
                    if let Some(nickname) = draft.nickname {
                        player.nickname = nickname;
                    }
                    if let Some(number) = draft.number {
                        player.number = number;
                    }
                    if let Some(position) = draft.position {
                        player.position = position;
                    }
                    if let Some(photo) = draft.photo {
                        player.photo = Some(photo);
                    }
                }
                None => {
                    let default_position = state
                        .players
                        .first()
                        .map(|p| p.position)
                        .unwrap_or(Position::MeioCampo);
                    let player = Player {
                        id: state.ids.next("p"),
                        name: draft.name.unwrap_or_else(|| "Novo Atleta".to_string()),
                        nickname: draft.nickname.unwrap_or_else(|| "Atleta".to_string()),
                        number: draft.number.unwrap_or(0),
                        position: draft.position.unwrap_or(default_position),
                        goals: 0,
                        assists: 0,
                        games_played: 0,
                        rating: 6.0,
                        photo: draft.photo,
                        is_paid: false,
                    };
                    state.players.push(player);
                }
            }
        }

        Intent::TogglePayment { player_id } => {
            if !state.is_admin {
                return;
            }
            if let Some(player) = state.players.iter_mut().find(|p| p.id == player_id) {
                player.is_paid = !player.is_paid;
            }
        }

        Intent::SaveMatch { editing, draft } => {
            if !state.is_admin {
                return;
            }
            match editing.and_then(|id| state.matches.iter_mut().find(|m| m.id == id)) {
                Some(m) => {
                    if let Some(opponent) = draft.opponent {
                        m.opponent = opponent;
                    }
                    if let Some(logo) = draft.opponent_logo {
                        m.opponent_logo = Some(logo);
                    }
                    if let Some(date) = draft.date {
                        m.date = date;
                    }
                    if let Some(location) = draft.location {
                        m.location = location;
                    }
                    if let Some(status) = draft.status {
                        m.status = status;
                    }
                    if let Some(score) = draft.score_home {
                        m.score_home = score;
                    }
                    if let Some(score) = draft.score_away {
                        m.score_away = score;
                    }
                    // Never taken from input.
                    m.is_completed = m.status == MatchStatus::Finalizado;
                }
                None => {
                    let status = draft.status.unwrap_or(MatchStatus::Agendado);
                    let m = Match {
                        id: state.ids.next("m"),
                        opponent: draft.opponent.unwrap_or_else(|| "Adversário".to_string()),
                        opponent_logo: draft.opponent_logo,
                        date: draft.date.unwrap_or_else(now_datetime),
                        location: draft
                            .location
                            .unwrap_or_else(|| "Local a definir".to_string()),
                        status,
                        is_completed: status == MatchStatus::Finalizado,
                        score_home: draft.score_home.unwrap_or(0),
                        score_away: draft.score_away.unwrap_or(0),
                        players_confirmed: Vec::new(),
                        players_declined: Vec::new(),
                        events: Vec::new(),
                    };
                    // Newest first.
                    state.matches.insert(0, m);
                }
            }
        }

        Intent::UpdateMatchStatus { match_id, status } => {
            if !state.is_admin {
                return;
            }
            if let Some(m) = state.matches.iter_mut().find(|m| m.id == match_id) {
                m.status = status;
                m.is_completed = status == MatchStatus::Finalizado;
            }
        }

        Intent::TogglePresence {
            match_id,
            player_id,
            attending,
        } => {
            // Deliberately open to everyone.
            if let Some(m) = state.matches.iter_mut().find(|m| m.id == match_id) {
                m.players_confirmed.retain(|id| *id != player_id);
                m.players_declined.retain(|id| *id != player_id);
                if attending {
                    m.players_confirmed.push(player_id);
                } else {
                    m.players_declined.push(player_id);
                }
            }
        }

        Intent::AddMatchEvent {
            match_id,
            player_id,
            kind,
        } => {
            if !state.is_admin {
                return;
            }
            let event_id = state.ids.next("e");
            if let Some(m) = state.matches.iter_mut().find(|m| m.id == match_id) {
                m.events.push(MatchEvent {
                    id: event_id,
                    player_id,
                    kind,
                    minute: 0,
                });
                // A goal always credits the home score, whoever scored.
                if kind == EventKind::Goal {
                    m.score_home = m.score_home.saturating_add(1);
                }
            }
        }

        Intent::RemoveMatchEvent { match_id, event_id } => {
            if !state.is_admin {
                return;
            }
            if let Some(m) = state.matches.iter_mut().find(|m| m.id == match_id) {
                let removed_goal = m
                    .events
                    .iter()
                    .find(|e| e.id == event_id)
                    .is_some_and(|e| e.kind == EventKind::Goal);
                m.events.retain(|e| e.id != event_id);
                if removed_goal {
                    m.score_home = m.score_home.saturating_sub(1);
                }
            }
        }

        Intent::SaveTransaction { draft } => {
            if !state.is_admin {
                return;
            }
            let t = Transaction {
                id: state.ids.next("t"),
                description: draft
                    .description
                    .unwrap_or_else(|| "Transação".to_string()),
                amount: draft.amount.unwrap_or(0.0),
                date: draft.date.unwrap_or_else(today),
                kind: draft.kind.unwrap_or(TransactionKind::Income),
                category: draft.category.unwrap_or_else(|| "Geral".to_string()),
            };
            // Prepended so "recent activity" reads come first.
            state.transactions.insert(0, t);
        }

        Intent::SaveLeagueEntry { editing, draft } => {
            if !state.is_admin {
                return;
            }
            let wins = draft.wins.unwrap_or(0);
            let draws = draft.draws.unwrap_or(0);
            let losses = draft.losses.unwrap_or(0);
            match editing.and_then(|id| state.league_entries.iter_mut().find(|e| e.id == id)) {
                Some(entry) => {
                    if let Some(name) = draft.team_name {
                        entry.team_name = name;
                    }
                    if let Some(logo) = draft.logo {
                        entry.logo = Some(logo);
                    }
                    entry.wins = wins;
                    entry.draws = draws;
                    entry.losses = losses;
                    entry.goals_for = draft.goals_for.unwrap_or(0);
                    entry.goals_against = draft.goals_against.unwrap_or(0);
                    entry.yellow_cards = draft.yellow_cards.unwrap_or(0);
                    entry.red_cards = draft.red_cards.unwrap_or(0);
                    standings::finalize_entry(entry);
                }
                None => {
                    let mut entry = LeagueEntry {
                        id: state.ids.next("l"),
                        team_name: draft
                            .team_name
                            .unwrap_or_else(|| "Nova Equipe".to_string()),
                        logo: draft.logo,
                        games: 0,
                        points: 0,
                        wins,
                        draws,
                        losses,
                        goals_for: draft.goals_for.unwrap_or(0),
                        goals_against: draft.goals_against.unwrap_or(0),
                        yellow_cards: draft.yellow_cards.unwrap_or(0),
                        red_cards: draft.red_cards.unwrap_or(0),
                    };
                    standings::finalize_entry(&mut entry);
                    state.league_entries.push(entry);
                }
            }
        }

        Intent::DeleteLeagueEntry { entry_id } => {
            if !state.is_admin {
                return;
            }
            state.pending = Some(PendingAction::DeleteLeagueEntry { entry_id });
        }

        Intent::SetLeagueName { name } => {
            if !state.is_admin {
                return;
            }
            state.league_name = name;
        }

        Intent::AddGalleryImage { data, caption } => {
            if !state.is_admin {
                return;
            }
            let image = GalleryImage {
                id: state.ids.next("g"),
                data,
                caption: caption.filter(|c| !c.trim().is_empty()),
                date: today(),
            };
            state.gallery.push(image);
        }

        Intent::DeleteGalleryImage { image_id } => {
            if !state.is_admin {
                return;
            }
            state.pending = Some(PendingAction::DeleteGalleryImage { image_id });
        }

        Intent::ConfirmPending => {
            let Some(action) = state.pending.take() else {
                return;
            };
            match action {
                PendingAction::DeleteLeagueEntry { entry_id } => {
                    state.league_entries.retain(|e| e.id != entry_id);
                }
                PendingAction::DeleteGalleryImage { image_id } => {
                    state.gallery.retain(|g| g.id != image_id);
                }
            }
            state.clamp_selection();
        }

        Intent::CancelPending => {
            state.pending = None;
        }

        Intent::NudgeMarker { idx, dx, dy } => {
            if !state.is_admin {
                return;
            }
            state.board.nudge(idx, dx, dy);
        }

        Intent::AdvisorResult { kind, text } => match kind {
            AdvisorKind::TacticalAdvice => {
                state.advice = Some(text);
                state.advice_loading = false;
            }
            AdvisorKind::MatchReport => {
                state.report = Some(text);
                state.report_loading = false;
            }
        },

        Intent::Log(msg) => state.push_log(msg),
    }
}
