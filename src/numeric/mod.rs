// ============================================================================
// Numeric Module
// Exact decimal handling for picker bounds
// ============================================================================
//
// This module provides:
// - BoundDigits: per-position digits of the picker's minimum and maximum
// - decimal_from_f32 / render: f32 <-> fixed-precision decimal strings
// - NumericError: Error types for bound conversion
//
// Design principles:
// - Bounds are decomposed once through rust_decimal, never through float math
// - Conversion returns Result (no panics)

mod decomposer;
mod errors;

pub use decomposer::{
    aligned_digits, at_scale, decimal_from_f32, minimal_scale, non_negative, render, BoundDigits, DigitBuf,
    FILLER,
};
pub use errors::{NumericError, NumericResult};
