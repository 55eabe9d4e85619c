use crate::store::reducer::InsertPosition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "todo-store";

pub const KEYS: [&str; 3] = ["insert_position", "log_level", "log_file"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub insert_position: InsertPosition,
    pub log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            insert_position: InsertPosition::Top,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = get_config_file_path()?;

        if !config_path.exists() {
            return Err(ConfigError::ConfigNotFound);
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Like `load`, but a missing config file yields the defaults.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::load() {
            Ok(config) => Ok(config),
            Err(ConfigError::ConfigNotFound) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = get_config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        fs::write(&config_path, self.to_toml()?)
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "insert_position" => Ok(self.insert_position.to_string()),
            "log_level" => Ok(self.log_level.clone()),
            "log_file" => Ok(self.log_file.clone().unwrap_or_default()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        match key {
            "insert_position" => {
                self.insert_position = value
                    .parse()
                    .map_err(|e| ConfigError::InvalidValue(key.to_string(), e))?;
            }
            "log_level" => {
                tracing_subscriber::EnvFilter::try_new(&value)
                    .map_err(|e| ConfigError::InvalidValue(key.to_string(), e.to_string()))?;
                self.log_level = value;
            }
            "log_file" => {
                self.log_file = if value.is_empty() { None } else { Some(value) };
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn log_file_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_file {
            Some(path) => Ok(PathBuf::from(path)),
            None => {
                let data_dir = dirs::data_local_dir().ok_or(ConfigError::DataDirNotFound)?;
                Ok(data_dir.join(APP_DIR).join("todo-store.log"))
            }
        }
    }
}

fn get_config_file_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join(APP_DIR).join("config.toml"))
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigNotFound,
    ConfigDirNotFound,
    DataDirNotFound,
    UnknownKey(String),
    InvalidValue(String, String),
    ReadError(String),
    WriteError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ConfigNotFound => {
                write!(f, "Configuration not found. Run 'todo-store config set <key> <value>' to create one.")
            }
            ConfigError::ConfigDirNotFound => {
                write!(f, "Could not find config directory")
            }
            ConfigError::DataDirNotFound => {
                write!(f, "Could not find local data directory; set 'log_file' explicitly")
            }
            ConfigError::UnknownKey(key) => {
                write!(f, "Unknown configuration key '{}'. Supported keys: {}", key, KEYS.join(", "))
            }
            ConfigError::InvalidValue(key, msg) => {
                write!(f, "Invalid value for '{}': {}", key, msg)
            }
            ConfigError::ReadError(msg) => {
                write!(f, "Failed to read config file: {}", msg)
            }
            ConfigError::WriteError(msg) => {
                write!(f, "Failed to write config file: {}", msg)
            }
            ConfigError::ParseError(msg) => {
                write!(f, "Failed to parse config file: {}", msg)
            }
            ConfigError::SerializeError(msg) => {
                write!(f, "Failed to serialize config: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
