use crate::error::{BotError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;
const DEFAULT_ADDRESSBOOK_FILE: &str = "addressbook.json";
const DEFAULT_NOTEBOOK_FILE: &str = "notebook.json";

/// Configuration for the assistant, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BotConfig {
    /// Window used by `birthdays` when no day count is given
    #[serde(default = "default_birthday_window_days")]
    pub birthday_window_days: i64,

    /// File name of the address book blob inside the data directory
    #[serde(default = "default_addressbook_file")]
    pub addressbook_file: String,

    /// File name of the notebook blob inside the data directory
    #[serde(default = "default_notebook_file")]
    pub notebook_file: String,
}

fn default_birthday_window_days() -> i64 {
    DEFAULT_BIRTHDAY_WINDOW_DAYS
}

fn default_addressbook_file() -> String {
    DEFAULT_ADDRESSBOOK_FILE.to_string()
}

fn default_notebook_file() -> String {
    DEFAULT_NOTEBOOK_FILE.to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            addressbook_file: default_addressbook_file(),
            notebook_file: default_notebook_file(),
        }
    }
}

impl BotConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BotError::Io)?;
        let config: BotConfig =
            serde_json::from_str(&content).map_err(BotError::Serialization)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BotConfig::default();
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.addressbook_file, "addressbook.json");
        assert_eq!(config.notebook_file, "notebook.json");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = BotConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, BotConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"birthday_window_days": 14, "notebook_file": "notes.json"}"#,
        )
        .unwrap();

        let loaded = BotConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.birthday_window_days, 14);
        assert_eq!(loaded.notebook_file, "notes.json");
        assert_eq!(loaded.addressbook_file, "addressbook.json");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{").unwrap();
        assert!(matches!(
            BotConfig::load(temp_dir.path()),
            Err(BotError::Serialization(_))
        ));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: BotConfig = serde_json::from_str(r#"{"birthday_window_days": 3}"#).unwrap();
        assert_eq!(parsed.birthday_window_days, 3);
        assert_eq!(parsed.notebook_file, "notebook.json");
    }
}
