// ============================================================================
// Engine Module
// Contains the core picker business logic
// ============================================================================

mod assembler;
mod propagation;
mod session;

pub mod factory;

pub use assembler::{
    assemble, assemble_decimal, combined_value, render_digits, reset, seed, try_assemble_decimal,
};
pub use factory::{create_from_config, create_vector, PickerSessionBuilder};
pub use propagation::{
    on_slot_changed, propagate, propagated, step, CarryOutcome, Direction, PropagationReport,
    SlotChange,
};
pub use session::PickerSession;
