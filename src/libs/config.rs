//! Application configuration.
//!
//! The configuration is a small JSON file (`config.json`) in the platform
//! data directory resolved by [`DataStorage`]. Its only setting is where the
//! task store lives; when unset, the store is `tasks.json` next to the
//! configuration file.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\tasker\config.json`
//! - **macOS**: `~/Library/Application Support/tasker/config.json`
//! - **Linux**: `~/.local/share/tasker/config.json`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasker::libs::config::Config;
//!
//! let config = Config::read()?;
//! let store = config.store_path()?;
//! println!("Tasks are kept in {}", store.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default task store file name inside the data directory.
pub const STORE_FILE_NAME: &str = "tasks.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Explicit location of the task store. `None` means the default file in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_file: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration, or the default one if no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file, returning to defaults.
    pub fn reset() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Resolves the task store path.
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.storage_file {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(STORE_FILE_NAME)?),
        }
    }

    /// Interactive setup: asks for the store location, keeping the current value as default.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let current = config.storage_file.as_ref().map(|p| p.display().to_string()).unwrap_or_default();
        let storage_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStorageFile.to_string())
            .default(current)
            .allow_empty(true)
            .interact_text()?;

        let storage_file = storage_file.trim();
        config.storage_file = if storage_file.is_empty() { None } else { Some(PathBuf::from(storage_file)) };

        Ok(config)
    }
}
