// ============================================================================
// Construction Errors
// Errors that prevent a picker session from being created
// ============================================================================

use crate::numeric::NumericError;
use rust_decimal::Decimal;
use std::fmt;

/// Errors detected while building a digit vector.
///
/// Construction is all-or-nothing: no partial vector is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// `max < min`
    InvalidRange { min: Decimal, max: Decimal },
    /// The supplied default lies outside `[min, max]`
    InvalidDefault {
        default: Decimal,
        min: Decimal,
        max: Decimal,
    },
    /// A bound or default could not be represented as a decimal
    Numeric(NumericError),
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::InvalidRange { min, max } => {
                write!(f, "invalid range: max value {} is below min value {}", max, min)
            },
            ConstructionError::InvalidDefault { default, min, max } => write!(
                f,
                "invalid default: {} is outside [{}, {}]",
                default, min, max
            ),
            ConstructionError::Numeric(err) => write!(f, "invalid bound: {}", err),
        }
    }
}

impl std::error::Error for ConstructionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConstructionError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for ConstructionError {
    fn from(err: NumericError) -> Self {
        ConstructionError::Numeric(err)
    }
}

/// Result type alias for picker construction
pub type PickerResult<T> = Result<T, ConstructionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = ConstructionError::InvalidRange {
            min: Decimal::from(10),
            max: Decimal::from(5),
        };
        assert_eq!(
            err.to_string(),
            "invalid range: max value 5 is below min value 10"
        );

        let err = ConstructionError::InvalidDefault {
            default: Decimal::from(30),
            min: Decimal::ZERO,
            max: Decimal::from(25),
        };
        assert_eq!(err.to_string(), "invalid default: 30 is outside [0, 25]");
    }

    #[test]
    fn test_numeric_source() {
        let err: ConstructionError = NumericError::NonFinite.into();
        assert_eq!(err, ConstructionError::Numeric(NumericError::NonFinite));
        assert!(err.source().is_some());
        assert!(ConstructionError::InvalidRange {
            min: Decimal::ONE,
            max: Decimal::ZERO
        }
        .source()
        .is_none());
    }
}
