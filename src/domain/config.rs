// ============================================================================
// Picker Configuration
// Validated construction parameters for one picker session
// ============================================================================

use super::error::{ConstructionError, PickerResult};
use crate::numeric::{at_scale, decimal_from_f32, minimal_scale, non_negative};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Widest integer range the `digits` preset will build (28 nines).
const MAX_PRESET_DIGITS: u32 = 28;

/// Opaque host payload, echoed back in every action event.
pub type PickerParams = BTreeMap<String, String>;

/// Comprehensive configuration for creating a picker session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PickerConfig {
    /// Smallest selectable value (inclusive)
    pub min_value: Decimal,

    /// Largest selectable value (inclusive)
    pub max_value: Decimal,

    /// Optional: initial and reset value
    /// None means the session starts at `min_value`
    pub default_value: Option<Decimal>,

    /// Optional: title shown by the host above the wheels
    pub title: Option<String>,

    /// Optional: host payload passed back on confirm, neutral, cancel and dismiss
    pub params: Option<PickerParams>,
}

impl PickerConfig {
    /// Create a new configuration with required parameters
    pub fn new(min_value: Decimal, max_value: Decimal) -> Self {
        Self {
            min_value,
            max_value,
            default_value: None,
            title: None,
            params: None,
        }
    }

    /// Create a configuration from single-precision host values.
    ///
    /// Each value goes through its shortest decimal rendering, so
    /// `from_f32(0.0, 9.5, None)` yields exactly one fractional digit.
    pub fn from_f32(min_value: f32, max_value: f32, default_value: Option<f32>) -> PickerResult<Self> {
        let mut config = Self::new(decimal_from_f32(min_value)?, decimal_from_f32(max_value)?);
        if let Some(default) = default_value {
            config.default_value = Some(decimal_from_f32(default)?);
        }
        Ok(config)
    }

    /// Builder method: Set the default value
    pub fn with_default(mut self, default_value: Decimal) -> Self {
        self.default_value = Some(default_value);
        self
    }

    /// Builder method: Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder method: Set the host payload
    pub fn with_params(mut self, params: PickerParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Builder method: Add one entry to the host payload
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(PickerParams::new)
            .insert(key.into(), value.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> PickerResult<()> {
        let min = non_negative(self.min_value)?;
        let max = non_negative(self.max_value)?;

        if max < min {
            return Err(ConstructionError::InvalidRange { min, max });
        }

        if let Some(default) = self.default_value {
            if default < min || default > max {
                return Err(ConstructionError::InvalidDefault { default, min, max });
            }
        }

        // Both bounds must keep every fractional digit once written at the
        // picker precision
        let decimal_point = self.decimal_point();
        at_scale(min, decimal_point)?;
        at_scale(max, decimal_point)?;

        Ok(())
    }

    /// Number of fractional digits: the larger of the two bounds' scales once
    /// trailing zeros are stripped.
    pub fn decimal_point(&self) -> u32 {
        minimal_scale(self.min_value).max(minimal_scale(self.max_value))
    }

    /// The value a fresh or reset session shows.
    pub fn effective_default(&self) -> Decimal {
        self.default_value.unwrap_or(self.min_value)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl PickerConfig {
    /// Whole percentages, 0 to 100
    pub fn percentage() -> Self {
        Self::new(Decimal::ZERO, Decimal::from(100))
    }

    /// Every integer that fits in `count` wheels, 0 to 10^count - 1
    pub fn digits(count: u32) -> Self {
        let count = count.min(MAX_PRESET_DIGITS);
        let max = 10i128.pow(count) - 1;
        Self::new(Decimal::ZERO, Decimal::from_i128_with_scale(max, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    #[test]
    fn test_config_creation() {
        let config = PickerConfig::new(Decimal::ZERO, Decimal::from(25));

        assert_eq!(config.min_value, Decimal::ZERO);
        assert_eq!(config.effective_default(), Decimal::ZERO);
        assert_eq!(config.decimal_point(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PickerConfig::new(Decimal::ZERO, Decimal::from(25))
            .with_default(Decimal::from(12))
            .with_title("Quantity");

        assert_eq!(config.default_value, Some(Decimal::from(12)));
        assert_eq!(config.effective_default(), Decimal::from(12));
        assert_eq!(config.title.as_deref(), Some("Quantity"));
    }

    #[test]
    fn test_validation() {
        let config = PickerConfig::new(Decimal::from(10), Decimal::from(5));
        assert!(matches!(
            config.validate(),
            Err(ConstructionError::InvalidRange { .. })
        ));

        let config =
            PickerConfig::new(Decimal::ZERO, Decimal::from(25)).with_default(Decimal::from(26));
        assert!(matches!(
            config.validate(),
            Err(ConstructionError::InvalidDefault { .. })
        ));

        let config = PickerConfig::new(Decimal::from(-1), Decimal::from(5));
        assert_eq!(
            config.validate(),
            Err(ConstructionError::Numeric(NumericError::Negative))
        );
    }

    #[test]
    fn test_validation_rejects_unscalable_bounds() {
        // 10^20 with ten fractional digits needs a 31-digit mantissa
        let config = PickerConfig::new(
            Decimal::new(1, 10),
            Decimal::from_i128_with_scale(10i128.pow(20), 0),
        );
        assert_eq!(config.decimal_point(), 10);
        assert_eq!(
            config.validate(),
            Err(ConstructionError::Numeric(NumericError::Overflow))
        );

        let config = PickerConfig::new(
            Decimal::new(5, 1),
            Decimal::from_i128_with_scale(10i128.pow(27), 0),
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_params() {
        let config = PickerConfig::percentage()
            .with_param("field", "discount")
            .with_param("row", "3");

        let params = config.params.unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("field").map(String::as_str), Some("discount"));
    }

    #[test]
    fn test_decimal_point_from_scales() {
        let config = PickerConfig::new(Decimal::new(1250, 3), Decimal::new(95, 1));
        // 1.250 strips to 1.25
        assert_eq!(config.decimal_point(), 2);

        let config = PickerConfig::from_f32(0.0, 9.5, None).unwrap();
        assert_eq!(config.decimal_point(), 1);
    }

    #[test]
    fn test_from_f32_rejects_nan() {
        assert_eq!(
            PickerConfig::from_f32(0.0, f32::NAN, None),
            Err(ConstructionError::Numeric(NumericError::NonFinite))
        );
        assert_eq!(
            PickerConfig::from_f32(0.0, 10.0, Some(f32::INFINITY)),
            Err(ConstructionError::Numeric(NumericError::NonFinite))
        );
    }

    #[test]
    fn test_preset_configs() {
        let percent = PickerConfig::percentage();
        assert_eq!(percent.max_value, Decimal::from(100));

        let three = PickerConfig::digits(3);
        assert_eq!(three.max_value, Decimal::from(999));
        assert!(three.validate().is_ok());
    }
}
