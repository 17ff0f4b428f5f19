use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::offline_cache::http_client;
use crate::state::Intent;

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const ADVICE_FALLBACK: &str = "Não foi possível carregar a análise.";
const REPORT_FALLBACK: &str = "Erro ao gerar crônica.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorKind {
    TacticalAdvice,
    MatchReport,
}

#[derive(Debug, Clone)]
pub enum AdvisorCommand {
    TacticalAdvice {
        // "Nick (Position)" pairs, pre-formatted by the caller.
        players_summary: String,
        opponent: String,
    },
    MatchReport {
        opponent: String,
        score_home: u8,
        score_away: u8,
    },
}

/// Background worker: commands in, intents out. Best-effort only — every
/// failure collapses into the fixed fallback string for its operation.
pub fn spawn_advisor(tx: Sender<Intent>, cmd_rx: Receiver<AdvisorCommand>) {
    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            let (kind, text) = match cmd {
                AdvisorCommand::TacticalAdvice {
                    players_summary,
                    opponent,
                } => {
                    let prompt = format!(
                        "Dê dicas táticas curtas para o jogo contra {opponent}. \
                         Jogadores: {players_summary}."
                    );
                    let model = model_from_env("ADVICE_MODEL", "gemini-3-pro-preview");
                    let text = generate(&model, &prompt)
                        .unwrap_or_else(|_| ADVICE_FALLBACK.to_string());
                    (AdvisorKind::TacticalAdvice, text)
                }
                AdvisorCommand::MatchReport {
                    opponent,
                    score_home,
                    score_away,
                } => {
                    let prompt = format!(
                        "Escreva uma crônica curta: {score_home} x {score_away} contra {opponent}."
                    );
                    let model = model_from_env("REPORT_MODEL", "gemini-3-flash-preview");
                    let text = generate(&model, &prompt)
                        .unwrap_or_else(|_| REPORT_FALLBACK.to_string());
                    (AdvisorKind::MatchReport, text)
                }
            };
            if tx.send(Intent::AdvisorResult { kind, text }).is_err() {
                return;
            }
        }
    });
}

fn model_from_env(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

fn generate(model: &str, prompt: &str) -> Result<String> {
    let key = std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not set")?;
    let client = http_client()?;
    let url = format!("{GEMINI_ENDPOINT}/{model}:generateContent?key={key}");

    let request = GenerateRequest {
        contents: vec![RequestContent {
            parts: vec![RequestPart {
                text: prompt.to_string(),
            }],
        }],
    };

    let body = client
        .post(&url)
        .json(&request)
        .send()
        .context("generate request failed")?
        .error_for_status()
        .context("generate request rejected")?
        .text()
        .context("read generate response")?;

    parse_generate_text(&body)
}

/// Pulls the completion text out of a raw response body: all parts of the
/// first candidate, concatenated. Blank completions count as failures so the
/// caller falls back.
pub fn parse_generate_text(body: &str) -> Result<String> {
    let response: GenerateResponse =
        serde_json::from_str(body).context("decode generate response")?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .map(|c| {
            c.content
                .parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(anyhow!("empty completion"));
    }
    Ok(text)
}
