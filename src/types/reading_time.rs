//! Reading time value: raw seconds split into clock minutes and seconds.

use std::fmt;

use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: u64 = 60;
const MINUTES_PER_HOUR: u64 = 60;

/// A whole number of seconds together with its clock-face minutes and seconds.
///
/// Minutes wrap at the hour the way a 24-hour clock started at midnight
/// would report them, so `3725` seconds reads as `02:05`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingTime {
    pub raw_seconds: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl ReadingTime {
    pub fn from_seconds(raw_seconds: u64) -> Self {
        Self {
            raw_seconds,
            minutes: (raw_seconds / SECONDS_PER_MINUTE) % MINUTES_PER_HOUR,
            seconds: raw_seconds % SECONDS_PER_MINUTE,
        }
    }

    /// Builds a reading time from a computed, possibly fractional, seconds value.
    ///
    /// Fractions are truncated toward zero. Negative, NaN and infinite values
    /// saturate to zero seconds.
    pub fn from_fractional_seconds(seconds: f64) -> Self {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Self::default();
        }
        Self::from_seconds(seconds.trunc() as u64)
    }

    /// Formats as zero-padded `MM:SS`.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}
