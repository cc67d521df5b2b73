// Read timer services
// Services provide the core functionality: estimating reading time and loading settings.

pub mod read_timer;
pub mod settings_engine;
