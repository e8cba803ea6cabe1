// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod error;
pub mod session_id;
pub mod slot;
pub mod snapshot;
pub mod vector;

pub use config::{PickerConfig, PickerParams};
pub use error::{ConstructionError, PickerResult};
pub use session_id::SessionId;
pub use slot::{Bound, DigitSlot, MAX_DIGIT};
pub use snapshot::{PickerSnapshot, SlotView};
pub use vector::DigitVector;
