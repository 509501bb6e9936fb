//! Configuration file parsing for pwcheck
//!
//! Supports `<config_dir>/pwcheck/config.toml` or an explicit `--config` path.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, load_settings_or_default, parse_settings};
pub use types::*;
