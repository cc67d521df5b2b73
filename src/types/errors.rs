use std::fmt;

// === ReadTimerError ===

/// Errors raised while attaching a read timer to a content element.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadTimerError {
    /// The matched content produced a total reading time of zero seconds.
    EmptyContent,
}

impl fmt::Display for ReadTimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadTimerError::EmptyContent => {
                write!(f, "No readable content found: add some content")
            }
        }
    }
}

impl std::error::Error for ReadTimerError {}

// === SettingsError ===

/// Errors related to loading read timer settings.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// An I/O error occurred while reading a settings file.
    IoError(String),
    /// Failed to parse settings JSON.
    SerializationError(String),
    /// A settings value is outside its accepted range.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
