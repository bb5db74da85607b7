use crate::core::system_info::runner::DEFAULT_TIMEOUT;
use crate::error::{Result, XolError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Keys accepted by [`Config::set`]
pub const KEYS: [&str; 3] = ["timeout", "color", "shells"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound for each external command, in milliseconds
    pub command_timeout_ms: u64,
    /// Emphasize labels with ANSI styles
    pub color: bool,
    /// Shells searched for on `PATH`, most preferred first
    pub shells: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command_timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            color: true,
            shells: vec!["bash".to_string(), "zsh".to_string()],
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Read a config file; a missing, empty or unreadable-as-JSON file
    /// yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        let mut config: Config = serde_json::from_str(&data).unwrap_or_else(|e| {
            // Format changed or file hand-edited badly
            warn!("Ignoring invalid config file {:?}: {}", path, e);
            Config::default()
        });

        // A zero timeout would kill every command on its first poll
        if config.command_timeout_ms == 0 {
            warn!(
                "Ignoring zero command timeout in {:?}, using {}ms",
                path,
                DEFAULT_TIMEOUT.as_millis()
            );
            config.command_timeout_ms = Config::default().command_timeout_ms;
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| XolError::config("Could not determine config directory"))?;

        Ok(config_dir.join("xoltab").join("config.json"))
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }

    /// Update one setting from its textual form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "timeout" => {
                let ms: u64 = value
                    .trim()
                    .parse()
                    .map_err(|_| XolError::config(format!("timeout must be milliseconds, got '{}'", value)))?;
                if ms == 0 {
                    return Err(XolError::config("timeout must be greater than zero"));
                }
                self.command_timeout_ms = ms;
            }
            "color" => {
                self.color = match value.trim().to_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    _ => {
                        return Err(XolError::config(format!(
                            "color must be on or off, got '{}'",
                            value
                        )))
                    }
                };
            }
            "shells" => {
                let shells: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                if shells.is_empty() {
                    return Err(XolError::config("shells needs at least one name"));
                }
                self.shells = shells;
            }
            other => {
                return Err(XolError::config(format!(
                    "unknown key '{}' (expected one of: {})",
                    other,
                    KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.command_timeout(), Duration::from_secs(3));
        assert!(config.color);
        assert_eq!(config.shells, vec!["bash", "zsh"]);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set("timeout", "1500").unwrap();
        config.set("color", "off").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.command_timeout_ms, 1500);
        assert!(!loaded.color);
    }

    #[test]
    fn test_corrupt_or_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        fs::write(&path, "{not json").unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        fs::write(&path, "{\"color\": false}").unwrap();
        let partial = Config::load_from(&path).unwrap();
        assert!(!partial.color);
        assert_eq!(partial.command_timeout_ms, 3000);
    }

    #[test]
    fn test_zero_timeout_in_file_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        fs::write(&path, "{\"command_timeout_ms\": 0, \"color\": false}").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.command_timeout_ms, 3000);
        assert_eq!(config.command_timeout(), DEFAULT_TIMEOUT);
        assert!(!config.color);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("timeout", "soon").is_err());
        assert!(config.set("timeout", "0").is_err());
        assert!(config.set("color", "maybe").is_err());
        assert!(config.set("shells", " , ").is_err());
        assert!(config.set("theme", "dark").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_set_shells_list() {
        let mut config = Config::default();
        config.set("shells", "fish, zsh ,bash").unwrap();
        assert_eq!(config.shells, vec!["fish", "zsh", "bash"]);
    }
}
