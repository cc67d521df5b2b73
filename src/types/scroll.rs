use serde::{Deserialize, Serialize};

/// One scroll notification from the hosting page, in CSS pixels.
///
/// Only `document_scroll_top` drives the estimate. The viewport values are
/// carried so hosts can forward exactly what the browser reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollEvent {
    pub viewport_scroll_top: f64,
    pub viewport_height: f64,
    pub document_scroll_top: f64,
}

impl ScrollEvent {
    /// An event where the viewport and the document report the same offset.
    pub fn at(scroll_top: f64) -> Self {
        Self {
            viewport_scroll_top: scroll_top,
            viewport_height: 0.0,
            document_scroll_top: scroll_top,
        }
    }
}

/// Lifecycle of an attached read timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerPhase {
    /// Total time is known; no scroll event has been handled yet.
    Loaded,
    /// At least one scroll event has recomputed the remaining time.
    Updating,
}
