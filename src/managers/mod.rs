// Read timer managers
// Managers own runtime collections: the scroll subscriptions of attached timers.

pub mod scroll_manager;
