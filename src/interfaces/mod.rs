// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod digit_wheel;
mod event_handler;

pub use digit_wheel::{sync_wheels, DigitWheel};
pub use event_handler::{EventHandler, LoggingEventHandler, NoOpEventHandler, PickerEvent};
