pub mod models;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, CountOnlyConfigItem, FileLoggingConfigItem, FormatConfigItem,
};
use crate::core::types::OutputFormat;
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    Format,
    CountOnly,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub format: FormatConfigItem,
    #[serde(default)]
    pub count_only: CountOnlyConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    path: Option<PathBuf>,
    data: ConfigFile,
}

impl Config {
    /// Loads `path` when given, otherwise falls back to built-in defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path: Some(path),
            data,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn format(&self) -> OutputFormat {
        *self.data.format.get_value()
    }
    pub fn count_only(&self) -> bool {
        *self.data.count_only.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        *self.data.file_logging_enabled.get_value()
    }

    /// `(KEY, description, value)` for every config key, in key order.
    pub fn rows(&self) -> Vec<(String, String, String)> {
        ConfigKey::iter()
            .map(|key| {
                let (description, value) = match key {
                    ConfigKey::Format => (
                        self.data.format.description(),
                        self.format().to_string(),
                    ),
                    ConfigKey::CountOnly => (
                        self.data.count_only.description(),
                        self.count_only().to_string(),
                    ),
                    ConfigKey::FileLoggingEnabled => (
                        self.data.file_logging_enabled.description(),
                        self.file_logging_enabled().to_string(),
                    ),
                };
                (key.to_string(), description.to_string(), value)
            })
            .collect()
    }
}
