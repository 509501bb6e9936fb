//! Settings file loading

use std::path::{Path, PathBuf};

use pwcheck_core::prelude::*;

use super::types::Settings;

const APP_DIR: &str = "pwcheck";
const CONFIG_FILENAME: &str = "config.toml";

/// Default location of the settings file: `<config_dir>/pwcheck/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load from an explicit path, or the default location when none is given
pub fn load_settings_or_default(config_path: Option<&Path>) -> Settings {
    match config_path {
        Some(path) => load_settings(path),
        None => match default_config_path() {
            Some(path) => load_settings(&path),
            None => {
                debug!("No config directory on this platform, using defaults");
                Settings::default()
            }
        },
    }
}

/// Parse settings text strictly, for callers that want the error
pub fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config(format!("Invalid config.toml: {}", e)))
}
