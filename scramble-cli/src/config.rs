//! Configuration loading and parsing

use anyhow::{Context, Result};
use clap::ValueEnum;
use scramble_core::ScrambleConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scramble: ScrambleConfig,
    #[serde(default)]
    pub callback: CallbackConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallbackConfig {
    #[serde(default)]
    pub mode: CallbackMode,
    /// Shared library to load the callback from (mode = "library")
    pub library: Option<PathBuf>,
    /// Exported symbol name of the callback
    #[serde(default = "default_symbol")]
    pub symbol: String,
}

impl Default for CallbackConfig {
    fn default() -> Self {
        Self {
            mode: CallbackMode::default(),
            library: None,
            symbol: default_symbol(),
        }
    }
}

fn default_symbol() -> String {
    "cb".to_string()
}

/// Which callback the scrambler runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CallbackMode {
    /// Rust TextSwapper, no C hop
    #[default]
    Builtin,
    /// Built-in C ABI swap callback, invoked through the C bridge
    Ffi,
    /// Callback loaded from a shared library
    Library,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    if config.callback.mode == CallbackMode::Library && config.callback.library.is_none() {
        log::warn!("Callback mode is \"library\" but no library path is configured");
    }

    Ok(config)
}
