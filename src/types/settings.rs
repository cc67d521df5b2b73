use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::SettingsError;

pub const DEFAULT_WORDS_PER_MINUTE: f64 = 210.0;
pub const DEFAULT_OUTPUT_SELECTOR: &str = "#read_timer";

/// Options recognized when attaching a read timer.
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReadTimerSettings {
    pub words_per_minute: f64,
    /// Tag names whose text counts toward the estimate, in selection order.
    #[serde(alias = "content_selectors")]
    pub content_tags: Vec<String>,
    /// Add the rendered height of images to the content height.
    pub include_images: bool,
    /// CSS selector of the element(s) receiving the status text.
    pub output_selector: String,
}

impl Default for ReadTimerSettings {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            content_tags: Self::default_content_tags(),
            include_images: false,
            output_selector: DEFAULT_OUTPUT_SELECTOR.to_string(),
        }
    }
}

impl ReadTimerSettings {
    /// Headings `h1` to `h6` followed by paragraphs.
    pub fn default_content_tags() -> Vec<String> {
        ["h1", "h2", "h3", "h4", "h5", "h6", "p"]
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    /// Merges a JSON options object over the defaults and validates the result.
    ///
    /// `null` yields the defaults.
    pub fn from_options(options: &Value) -> Result<Self, SettingsError> {
        if options.is_null() {
            return Ok(Self::default());
        }
        let settings: ReadTimerSettings = serde_json::from_value(options.clone())
            .map_err(|e| SettingsError::SerializationError(format!("Invalid options: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| SettingsError::SerializationError(format!("Invalid JSON: {}", e)))?;
        Self::from_options(&value)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.words_per_minute.is_finite() || self.words_per_minute <= 0.0 {
            return Err(SettingsError::InvalidValue(format!(
                "words_per_minute must be a positive number, got {}",
                self.words_per_minute
            )));
        }
        if self.output_selector.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "output_selector cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
