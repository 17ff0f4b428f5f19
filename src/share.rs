use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread;

use anyhow::{Context, Result};

use crate::offline_cache;
use crate::state::Intent;

const QR_ENDPOINT: &str = "https://chart.googleapis.com/chart";

pub fn share_url() -> String {
    std::env::var("SHARE_URL").unwrap_or_else(|_| "https://arena.example/app".to_string())
}

/// Share-sheet text: title, blurb and link on separate lines.
pub fn share_message(team_name: &str, url: &str) -> String {
    format!("{team_name}\nAcompanhe o {team_name} na temporada 2026!\n{url}")
}

/// The QR image is rendered by the external chart endpoint; nothing is
/// generated locally.
pub fn qr_url(url: &str) -> String {
    format!(
        "{QR_ENDPOINT}?cht=qr&chs=300x300&chl={}&choe=UTF-8&chld=L|2",
        urlencode(url)
    )
}

/// Fetches the QR PNG (cache-first) and writes it into the working
/// directory. Returns where it landed.
pub fn save_qr_png(url: &str) -> Result<PathBuf> {
    let body = offline_cache::fetch_cached(&qr_url(url))?;
    let path = PathBuf::from("arena_qr.png");
    std::fs::write(&path, body).context("write qr png")?;
    Ok(path)
}

/// Fetches and writes the QR off the event loop; the result lands in the
/// console through the intent channel.
pub fn spawn_qr_saver(tx: Sender<Intent>, url: String) {
    thread::spawn(move || {
        let msg = match save_qr_png(&url) {
            Ok(path) => format!("[INFO] QR salvo em {}", path.display()),
            Err(err) => format!("[WARN] QR indisponível: {err}"),
        };
        let _ = tx.send(Intent::Log(msg));
    });
}

fn urlencode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() * 3);
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
