//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive the remote client, the
//! refresh cadence, the UI and logging, plus helpers to load them from disk.

mod load;
mod schema;

pub use load::{default_log_path, resolve_config_path};
pub use schema::*;


/// Serializes tests that read or write process environment variables.
#[cfg(test)]
pub(crate) fn test_env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
