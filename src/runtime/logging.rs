use std::fs::{self, OpenOptions};

use crate::config::{self, LogSettings};

/// Route `log` output to a file; the terminal belongs to the TUI.
///
/// `RUST_LOG` wins over `settings.level`. When no file can be opened the
/// logger stays uninitialized and records are dropped.
pub fn init(settings: &LogSettings) {
    let Some(path) = settings.file.clone().or_else(config::default_log_path) else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("encore: cannot open log file {}: {e}", path.display());
            return;
        }
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.level.as_str()),
    )
    .format_timestamp_millis()
    .target(env_logger::Target::Pipe(Box::new(file)))
    .try_init();
}
