use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/encore/config.toml` or `~/.config/encore/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ENCORE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub remote: RemoteSettings,
    pub refresh: RefreshSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    /// Base URL of the Web API, without a trailing slash.
    pub api_base: String,
    /// Bearer token for the account. Obtaining it is up to the user.
    pub access_token: Option<String>,
    /// Maximum number of search results requested.
    pub search_limit: usize,
    pub connect_timeout_ms: u64,
    /// Read/write timeout for a single request.
    pub read_timeout_ms: u64,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            api_base: "https://api.spotify.com/v1".to_string(),
            access_token: None,
            search_limit: 10,
            connect_timeout_ms: 5_000,
            read_timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RefreshSettings {
    /// How often the now-playing panel polls the remote (milliseconds).
    pub now_playing_ms: u64,
    /// How often the queue polls the remote (milliseconds).
    pub queue_ms: u64,
    /// Upper bound on how long the loop waits for a key press.
    pub input_poll_ms: u64,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            now_playing_ms: 1_000,
            queue_ms: 3_000,
            input_poll_ms: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Separator between title and artist in list rows.
    pub track_separator: String,
    /// Whether the now-playing panel shows the album line.
    pub show_album: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ encore: what's playing, what's next ~ ".to_string(),
            track_separator: " - ".to_string(),
            show_album: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file; defaults to `$XDG_STATE_HOME/encore/encore.log`.
    pub file: Option<PathBuf>,
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}
