use crate::core::types::OutputFormat;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfigItem {
    pub value: OutputFormat,
    #[serde(default)]
    pub description: String,
}

impl Default for FormatConfigItem {
    fn default() -> Self {
        Self {
            value: OutputFormat::Plain,
            description: "Default output format (plain, json, csv).".into(),
        }
    }
}

impl ConfigItem<OutputFormat> for FormatConfigItem {
    fn get_value(&self) -> &OutputFormat {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountOnlyConfigItem {
    pub value: bool,
    #[serde(default)]
    pub description: String,
}

impl Default for CountOnlyConfigItem {
    fn default() -> Self {
        Self {
            value: false,
            description: "Print only the number of primes.".into(),
        }
    }
}

impl ConfigItem<bool> for CountOnlyConfigItem {
    fn get_value(&self) -> &bool {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: bool,
    #[serde(default)]
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: false,
            description: "Enable writing session logs to file.".into(),
        }
    }
}

impl ConfigItem<bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &bool {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}
