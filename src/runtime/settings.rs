use std::path::PathBuf;

use crate::config;

/// Settings as resolved at startup, before logging exists.
pub struct StartupSettings {
    pub settings: config::Settings,
    /// Where the config file layer was looked up.
    pub config_path: Option<PathBuf>,
    /// Why the loaded values were replaced by defaults.
    pub fallback: Option<String>,
}

impl StartupSettings {
    /// Write the outcome to the log once the logger is installed.
    pub fn report(&self) {
        match &self.config_path {
            Some(path) => log::info!("config file: {}", path.display()),
            None => log::info!("no config file location; using environment and defaults"),
        }
        if let Some(reason) = &self.fallback {
            log::warn!("{reason}; running with default settings");
        }
    }
}

/// Load and validate settings. A config that fails to parse or validate is
/// replaced by defaults so the app still starts.
pub fn load_settings() -> StartupSettings {
    let config_path = config::resolve_config_path();
    let (settings, fallback) = match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (config::Settings::default(), Some(format!("invalid config: {msg}"))),
        },
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config: {e}")),
        ),
    };
    if let Some(reason) = &fallback {
        eprintln!("encore: {reason}; using defaults");
    }
    StartupSettings {
        settings,
        config_path,
        fallback,
    }
}
