//! Configuration management for the reclog application.
//!
//! Holds the user's settings that outlive a single command: the weekly target
//! used by the dashboard and the status given to new records when none is
//! passed on the command line.
//!
//! ## Storage
//!
//! Configuration is stored as pretty-printed JSON (`config.json`) next to the
//! record database, in the directory resolved by [`DataStorage`]. A missing
//! file is not an error; the defaults are used instead.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use reclog::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.weekly_cap = Some(40.0);
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::record::STATUS_PENDING;
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name, stored alongside the database.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Weekly capacity in hours compared against the total duration of all
    /// records. `None` disables the capacity check.
    pub weekly_cap: Option<f64>,

    /// Status assigned by `reclog add` when `--status` is omitted.
    pub default_status: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weekly_cap: None,
            default_status: STATUS_PENDING.to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration from the default data directory.
    ///
    /// Returns [`Config::default`] when no configuration file exists yet.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Loads the configuration from a specific data directory.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration to the default data directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;

        let cap_input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWeeklyCap.to_string())
            .default(current.weekly_cap.map(|cap| cap.to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let default_status: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultStatus.to_string())
            .default(current.default_status.clone())
            .interact_text()?;

        Ok(Config {
            weekly_cap: parse_weekly_cap(&cap_input)?,
            default_status,
        })
    }
}

/// Parses the wizard's weekly target answer. Empty input disables the target.
pub fn parse_weekly_cap(input: &str) -> Result<Option<f64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(cap) if cap.is_finite() && cap >= 0.0 => Ok(Some(cap)),
        _ => msg_bail_anyhow!(Message::InvalidWeeklyCap(trimmed.to_string())),
    }
}

/// clap value parser for `--cap`. Same rules as the wizard, except that an
/// explicit flag must carry a value.
pub fn parse_cap_arg(input: &str) -> std::result::Result<f64, String> {
    match parse_weekly_cap(input) {
        Ok(Some(cap)) => Ok(cap),
        Ok(None) => Err(Message::InvalidWeeklyCap(input.to_string()).to_string()),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weekly_cap() {
        assert_eq!(parse_weekly_cap("").unwrap(), None);
        assert_eq!(parse_weekly_cap("  ").unwrap(), None);
        assert_eq!(parse_weekly_cap("40").unwrap(), Some(40.0));
        assert_eq!(parse_weekly_cap(" 12.5 ").unwrap(), Some(12.5));
        assert!(parse_weekly_cap("-3").is_err());
        assert!(parse_weekly_cap("lots").is_err());
    }

    #[test]
    fn test_parse_cap_arg_matches_wizard_rules() {
        assert_eq!(parse_cap_arg("40"), Ok(40.0));
        assert_eq!(parse_cap_arg("0"), Ok(0.0));
        assert!(parse_cap_arg("-1").is_err());
        assert!(parse_cap_arg("NaN").is_err());
        assert!(parse_cap_arg("inf").is_err());
        assert!(parse_cap_arg("").is_err());
    }
}
