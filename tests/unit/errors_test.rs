use readtimer::types::errors::*;

// === ReadTimerError Tests ===

#[test]
fn read_timer_error_empty_content_display() {
    assert_eq!(
        ReadTimerError::EmptyContent.to_string(),
        "No readable content found: add some content"
    );
}

#[test]
fn read_timer_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(ReadTimerError::EmptyContent);
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("permission denied".to_string()).to_string(),
        "Settings I/O error: permission denied"
    );
    assert_eq!(
        SettingsError::SerializationError("expected value".to_string()).to_string(),
        "Settings serialization error: expected value"
    );
    assert_eq!(
        SettingsError::InvalidValue("words_per_minute".to_string()).to_string(),
        "Invalid settings value: words_per_minute"
    );
}

#[test]
fn settings_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(SettingsError::InvalidValue("x".to_string()));
    assert!(err.source().is_none());
}
