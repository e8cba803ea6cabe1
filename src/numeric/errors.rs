// ============================================================================
// Numeric Errors
// Error types for converting picker bounds into exact decimals
// ============================================================================

use std::fmt;

/// Errors that can occur while turning a bound or default into a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input was NaN or infinite
    NonFinite,
    /// Input does not fit a 96-bit decimal
    Overflow,
    /// Input is below zero
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NonFinite => write!(f, "non-finite value: NaN or infinity"),
            NumericError::Overflow => {
                write!(f, "value overflow: too large for a decimal digit picker")
            },
            NumericError::Negative => write!(f, "negative value: only non-negative ranges are supported"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric conversions
pub type NumericResult<T> = Result<T, NumericError>;
