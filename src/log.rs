use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_VAR: &str = "CMDNOTIFY_LOG_FILE";
pub const LOG_FILTER_VAR: &str = "CMDNOTIFY_LOG";

/// Initialise the optional file logger.
///
/// Reads `CMDNOTIFY_LOG_FILE`; when set to a non-empty path the file is
/// opened in append mode and all subsequent `tracing` events go to it.
/// Otherwise no subscriber is installed and nothing reaches the terminal
/// the wrapped program is writing to.
pub fn init() {
    let Ok(path) = std::env::var(LOG_FILE_VAR) else {
        return;
    };
    if path.is_empty() {
        return;
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}
