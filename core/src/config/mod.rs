use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const SKILLKIT_DIR: &str = ".skillkit";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            color: true,
        }
    }
}

pub fn get_skillkit_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(SKILLKIT_DIR)
}

pub fn get_config_path() -> PathBuf {
    get_skillkit_dir().join("config.toml")
}

impl Config {
    /// Reads the TOML file at `config_path`, or defaults when there is none.
    pub fn load_or_default_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))
    }
}
