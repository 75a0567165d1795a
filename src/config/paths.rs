// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_config_dir_with_override`]
//!    (CLI `--config-dir`, tests)
//! 2. **Environment variable** `TIMERIGHT_REEL_CONFIG_DIR`
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "TimerightReel";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TIMERIGHT_REEL_CONFIG_DIR";

/// Returns the application config directory path.
///
/// - Linux: `~/.config/TimerightReel/`
/// - macOS: `~/Library/Application Support/TimerightReel/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\TimerightReel\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
