use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

use crate::state::Intent;

// The cache name doubles as the version tag: bumping it abandons every
// previously cached body. There is no other invalidation.
const CACHE_NAME: &str = "arena-manager-v1";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Fixed list of URLs warmed on startup.
pub const PRECACHE_URLS: &[&str] = &["https://cdn-icons-png.flaticon.com/512/53/53283.png"];

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent("arena-terminal/0.1")
            .build()
            .context("failed to build http client")
    })
}

pub fn cache_dir() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".cache")))?;
    Some(base.join(CACHE_NAME))
}

/// Cache-first fetch: a previously stored body is always preferred over the
/// network, mirroring the install-time precache + fetch interception scheme.
pub fn fetch_cached(url: &str) -> Result<Vec<u8>> {
    let path = cache_dir().map(|dir| dir.join(cache_key(url)));

    if let Some(path) = &path {
        if let Ok(body) = fs::read(path) {
            return Ok(body);
        }
    }

    let client = http_client()?;
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("request failed: {url}"))?
        .error_for_status()
        .with_context(|| format!("bad status from {url}"))?;
    let body = response.bytes().context("read response body")?.to_vec();

    if let Some(path) = &path {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = fs::write(path, &body);
    }
    Ok(body)
}

/// Best-effort warm-up of the fixed precache list. Returns how many entries
/// are now present.
pub fn precache() -> usize {
    PRECACHE_URLS
        .iter()
        .filter(|url| fetch_cached(url).is_ok())
        .count()
}

/// Runs the warm-up off the event loop and reports the outcome through the
/// intent channel. The fetches can block for the full client timeout.
pub fn spawn_precache(tx: Sender<Intent>) {
    thread::spawn(move || {
        let warmed = precache();
        let _ = tx.send(Intent::Log(format!(
            "[INFO] Cache offline pronto ({warmed}/{} itens)",
            PRECACHE_URLS.len()
        )));
    });
}

fn cache_key(url: &str) -> String {
    let mut key = String::with_capacity(url.len());
    for c in url.chars() {
        if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
            key.push(c);
        } else {
            key.push('_');
        }
    }
    key.truncate(120);
    key
}
