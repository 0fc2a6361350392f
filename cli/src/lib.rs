pub mod commands;
pub mod logging;

use skillkit_core::config::{self, Config};
use std::path::Path;

/// Loads the user config and installs console and logging settings from it.
///
/// Never fails: an unreadable config falls back to defaults with a warning.
pub fn bootstrap() -> Config {
    bootstrap_from(&config::get_config_path())
}

pub fn bootstrap_from(config_path: &Path) -> Config {
    let (config, load_error) = match Config::load_or_default_from(config_path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if !config.color {
        console::set_colors_enabled(false);
    }
    if let Err(e) = logging::init_logging(&config.log_level) {
        tracing::debug!("Logging already initialized: {}", e);
    }

    if let Some(e) = load_error {
        tracing::warn!("Using default config: {:#}", e);
    }

    config
}
