//! App Core for the read timer host bridge.
//!
//! Holds the mirrored page model and every timer attached to it. The host
//! forwards page structure and scroll events; the app answers with the text
//! and attributes the host should write back.

use crate::dom::memory::{MemoryDocument, MemoryElement};
use crate::managers::scroll_manager::{AttachedReadTimer, ScrollManager};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

/// Timers attached through the bridge measure the in-memory page model.
pub type BridgeTimer = AttachedReadTimer<MemoryElement>;

/// Central struct holding the page model, the scroll subscriptions and settings.
pub struct App {
    pub document: MemoryDocument,
    pub scroll_manager: ScrollManager<MemoryDocument, BridgeTimer>,
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Creates a new App.
    ///
    /// `config_path` points at an optional JSON file with the default attach
    /// options; a missing file means built-in defaults.
    pub fn new(config_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(config_path);
        settings_engine.load()?;

        Ok(Self {
            document: MemoryDocument::new(),
            scroll_manager: ScrollManager::new(),
            settings_engine,
        })
    }
}
