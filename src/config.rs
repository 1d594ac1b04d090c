use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "course-picker";

pub const CONFIG_KEYS: [&str; 3] = ["catalog_path", "cookie_path", "save_on_quit"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub catalog_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_path: Option<String>,
    #[serde(default = "default_save_on_quit")]
    pub save_on_quit: bool,
}

fn default_save_on_quit() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: String::new(),
            cookie_path: None,
            save_on_quit: default_save_on_quit(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_file_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::ConfigNotFound);
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Loads the config, or the defaults when none has been written yet.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::load() {
            Err(ConfigError::ConfigNotFound) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&get_config_file_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = toml::to_string(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(config_path, content)
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "catalog_path" => Ok(self.catalog_path.clone()),
            "cookie_path" => Ok(self.cookie_path.clone().unwrap_or_default()),
            "save_on_quit" => Ok(self.save_on_quit.to_string()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        match key {
            "catalog_path" => self.catalog_path = value,
            "cookie_path" => {
                self.cookie_path = if value.is_empty() { None } else { Some(value) };
            }
            "save_on_quit" => {
                self.save_on_quit = value
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue { key: key.to_string(), value })?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn require_catalog(&self) -> Result<&str, ConfigError> {
        if self.catalog_path.is_empty() {
            Err(ConfigError::ConfigNotFound)
        } else {
            Ok(&self.catalog_path)
        }
    }

    /// Where the cookie jar lives: `cookie_path`, else the data directory.
    pub fn cookie_file_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.cookie_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(get_data_dir()?.join("cookies.toml")),
        }
    }
}

fn get_config_file_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join(APP_DIR).join("config.toml"))
}

pub fn get_data_dir() -> Result<PathBuf, ConfigError> {
    let data_dir = dirs::data_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(data_dir.join(APP_DIR))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Configuration not found. Run 'course-picker config set catalog_path <path>' \
         to configure your course catalog."
    )]
    ConfigNotFound,
    #[error("Could not find config directory")]
    ConfigDirNotFound,
    #[error(
        "Unknown configuration key '{0}'. Supported keys: catalog_path, cookie_path, save_on_quit."
    )]
    UnknownKey(String),
    #[error("Invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to write config file: {0}")]
    WriteError(String),
    #[error("Failed to parse config file: {0}")]
    ParseError(String),
    #[error("Failed to serialize config: {0}")]
    SerializeError(String),
}
