// ============================================================================
// Digit Picker Library
// Odometer-style decimal picker engine with per-digit bound propagation
// ============================================================================

//! # Digit Picker
//!
//! A constraint-propagation engine for picking one decimal number by spinning
//! one wheel per decimal position, like an odometer.
//!
//! ## Features
//!
//! - **Exact bound decomposition** using `rust_decimal`, no float drift
//! - **Live bound propagation** so the combined value never leaves its range
//! - **Carry between wheels** when a wheel wraps from 9
//! - **Event reporting** through a pluggable [`EventHandler`](interfaces::EventHandler)
//! - **Host wheel contract** with a single synchronisation routine
//!
//! ## Example
//!
//! ```rust
//! use digit_picker::prelude::*;
//! use std::sync::Arc;
//!
//! // Pick a rating between 0.0 and 9.5, starting at 3.5
//! let config = PickerConfig::from_f32(0.0, 9.5, Some(3.5)).unwrap();
//! let mut session = PickerSession::open(config, Arc::new(NoOpEventHandler)).unwrap();
//!
//! // The ones wheel hits 9: the tenths wheel may now only go up to 5
//! session.on_slot_changed(0, 9);
//! assert_eq!(session.vector()[1].live_max(), 5);
//!
//! println!("Snapshot: {:?}", session.snapshot());
//! assert_eq!(session.confirm(), 9.5);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Bound, ConstructionError, DigitSlot, DigitVector, PickerConfig, PickerParams,
        PickerResult, PickerSnapshot, SessionId, SlotView,
    };
    pub use crate::engine::{
        combined_value, create_from_config, create_vector, on_slot_changed, reset, seed, step,
        CarryOutcome, Direction, PickerSession, PickerSessionBuilder, PropagationReport,
    };
    pub use crate::interfaces::{
        sync_wheels, DigitWheel, EventHandler, LoggingEventHandler, NoOpEventHandler, PickerEvent,
    };
    pub use crate::numeric::NumericError;
}
