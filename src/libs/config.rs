//! Configuration management for the wtime application.
//!
//! Settings live in `config.json` inside the application data directory and
//! are grouped into optional modules, each of which can be configured
//! through the interactive `wtime init` wizard:
//!
//! - **Tracker**: daily goal and live refresh interval
//! - **Storage**: alternative directory for the session, history and theme files
//!
//! A missing file is not an error: every module falls back to its defaults.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use wtime::libs::config::Config;
//!
//! let config = Config::read()?;
//! let tracker = config.tracker.unwrap_or_default();
//! println!("Daily goal: {} minutes", tracker.daily_goal_minutes);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A module offered by the configuration wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Tracker behaviour.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Worked minutes after which the daily goal notification fires.
    pub daily_goal_minutes: u64,

    /// Refresh period of `wtime watch`, in milliseconds.
    pub tick_interval_ms: u64,
}

/// Where the tracker keeps its files.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct StorageConfig {
    /// Directory for the session, history and theme files. Defaults to the
    /// application data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            daily_goal_minutes: 8 * 60,
            tick_interval_ms: 1000,
        }
    }
}

impl TrackerConfig {
    pub fn daily_goal_ms(&self) -> u64 {
        self.daily_goal_minutes * 60_000
    }

    /// The refresh period, never shorter than 10ms.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(10))
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads `config.json` from `storage`, or returns the defaults if it does not exist.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes `config.json`, if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive setup wizard, starting from the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [
            ConfigModule {
                key: "tracker".to_string(),
                name: "Tracker".to_string(),
            },
            ConfigModule {
                key: "storage".to_string(),
                name: "Storage".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "tracker" => {
                    let default = config.tracker.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTracker);
                    config.tracker = Some(TrackerConfig {
                        daily_goal_minutes: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDailyGoalMinutes.to_string())
                            .default(default.daily_goal_minutes)
                            .interact_text()?,

                        tick_interval_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTickInterval.to_string())
                            .default(default.tick_interval_ms)
                            .interact_text()?,
                    });
                }
                "storage" => {
                    let default = config
                        .storage
                        .clone()
                        .and_then(|s| s.path)
                        .unwrap_or_else(|| DataStorage::new().base_path().to_path_buf());
                    msg_print!(Message::ConfigModuleStorage);
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptStoragePath.to_string())
                        .default(default.display().to_string())
                        .interact_text()?;
                    config.storage = Some(StorageConfig {
                        path: Some(PathBuf::from(path)),
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
