// Read timer shared type definitions
// Each submodule defines types used across the crate.

pub mod errors;
pub mod reading_time;
pub mod scroll;
pub mod settings;
