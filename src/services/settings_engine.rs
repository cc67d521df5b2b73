// Read Timer Settings Engine
// Loads the default attach options for a host from a JSON file.
// Missing files fall back to the built-in defaults; partial files are merged over them.

use std::fs;
use std::path::Path;

use log::debug;

use crate::types::errors::SettingsError;
use crate::types::settings::ReadTimerSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<ReadTimerSettings, SettingsError>;
    fn get_settings(&self) -> &ReadTimerSettings;
    /// Settings for one attach call: `options` merged over the loaded settings.
    fn resolve(&self, options: &serde_json::Value) -> Result<ReadTimerSettings, SettingsError>;
    fn get_config_path(&self) -> Option<&str>;
}

/// Settings engine backed by an optional JSON file.
pub struct SettingsEngine {
    config_path: Option<String>,
    settings: ReadTimerSettings,
}

impl SettingsEngine {
    pub fn new(config_path: Option<String>) -> Self {
        Self {
            config_path,
            settings: ReadTimerSettings::default(),
        }
    }
}

impl Default for SettingsEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// Without a path, or if the file does not exist, the defaults are used.
    /// A malformed file is a serialization error.
    fn load(&mut self) -> Result<ReadTimerSettings, SettingsError> {
        let Some(config_path) = self.config_path.as_deref() else {
            self.settings = ReadTimerSettings::default();
            return Ok(self.settings.clone());
        };
        let path = Path::new(config_path);

        if !path.exists() {
            debug!("no settings file at {}, using defaults", config_path);
            self.settings = ReadTimerSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        self.settings = ReadTimerSettings::from_json_str(&content)?;
        Ok(self.settings.clone())
    }

    fn get_settings(&self) -> &ReadTimerSettings {
        &self.settings
    }

    fn resolve(&self, options: &serde_json::Value) -> Result<ReadTimerSettings, SettingsError> {
        if options.is_null() {
            return Ok(self.settings.clone());
        }
        let overrides = options.as_object().ok_or_else(|| {
            SettingsError::SerializationError("Options must be a JSON object".to_string())
        })?;

        let mut merged = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;
        if let Some(base) = merged.as_object_mut() {
            for (key, value) in overrides {
                let key = if key == "content_selectors" { "content_tags" } else { key.as_str() };
                base.insert(key.to_string(), value.clone());
            }
        }
        ReadTimerSettings::from_options(&merged)
    }

    fn get_config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }
}
