//! Logging init: file under the XDG state dir, stderr when unavailable.

use std::fs;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Initializes tracing. Prefers a log file at
/// `~/.local/state/tilegrab/tilegrab.log`; when the state dir cannot be
/// created or the file cannot be opened, events go to stderr instead.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tilegrab_core=debug,tilegrab_cli=debug"));

    match open_log_file() {
        Some(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .init();
        }
    }
}

fn open_log_file() -> Option<fs::File> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tilegrab").ok()?;
    let path = xdg_dirs.place_state_file("tilegrab.log").ok()?;
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()
}
