//! Configuration for the `lytht` driver.
//!
//! Layered under CLI flags: a `lytht.toml` supplies REPL echo/color defaults,
//! which `main` overrides with whatever the user passed on the command line.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{LythtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lytht.toml";

/// REPL and driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Print each token the lexer produces before parsing it.
    #[serde(default)]
    pub echo_tokens: bool,

    /// Print the AST node for each statement before analyzing it.
    #[serde(default)]
    pub echo_ast: bool,

    /// Colorize the `>>> ` prompt and error output.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            echo_tokens: false,
            echo_ast: false,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches, in order: the current directory, the user's home
    /// directory, then the platform config directory. Returns the default
    /// configuration if no config file is found anywhere.
    pub fn load() -> Result<Self> {
        match Self::find_config_file()? {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LythtError::Config(format!("Configuration file not found: {}", path.display())));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific path, creating parent directories
    /// as needed.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("lytht").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lytht").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Result<Option<PathBuf>> {
        Ok(Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config))
    }
}
