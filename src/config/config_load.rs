// src/config/config_load.rs
//
// loading of config.toml

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;
use crate::error::{Error, Result};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub rendering: RenderConfig,
    pub paths: PathConfig,
    pub osc: OscConfig,
    pub debug: DebugConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let config_path = exe_path.parent()?.join(CONFIG_FILE);

        if config_path.exists() {
            Self::load_from_path(&config_path).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self> {
        Self::load_from_path(Path::new(CONFIG_FILE))
    }

    pub fn resolve_output_dir(&self) -> PathBuf {
        let output_dir = Path::new(&self.paths.output_directory);
        if output_dir.is_absolute() {
            return output_dir.to_path_buf();
        }

        // Relative paths resolve against the executable's directory when it is known
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .map(|exe_dir| exe_dir.join(output_dir))
            .unwrap_or_else(|| output_dir.to_path_buf())
    }
}
