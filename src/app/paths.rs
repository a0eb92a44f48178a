// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`MEETDECK_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "MeetDeck";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "MEETDECK_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::debug!("CLI config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path with an optional override.
///
/// Platform defaults:
/// - Linux: `~/.config/MeetDeck/`
/// - macOS: `~/Library/Application Support/MeetDeck/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\MeetDeck\`
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch the process environment
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_override_wins() {
        let override_path = PathBuf::from("/tmp/meetdeck-override");
        assert_eq!(
            get_app_config_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );
    }

    #[test]
    fn env_var_is_used_when_set() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/meetdeck-env");
        let resolved = get_app_config_dir_with_override(None);
        std::env::remove_var(ENV_CONFIG_DIR);

        // A CLI override set by another test would take priority
        if get_cli_config_dir().is_none() {
            assert_eq!(resolved, Some(PathBuf::from("/tmp/meetdeck-env")));
        }
    }

    #[test]
    fn default_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);
        if get_cli_config_dir().is_none() {
            if let Some(path) = get_app_config_dir_with_override(None) {
                assert!(path.ends_with(APP_NAME));
            }
        }
    }
}
