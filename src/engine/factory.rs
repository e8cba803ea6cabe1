// ============================================================================
// Picker Factory
// Creates digit vectors and sessions with proper configuration
// ============================================================================

use super::propagation::settle;
use super::session::PickerSession;
use crate::domain::{DigitVector, PickerConfig, PickerResult};
use crate::interfaces::EventHandler;
use crate::numeric::BoundDigits;
use rust_decimal::Decimal;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a digit vector from host values
///
/// # Arguments
/// * `min` - Smallest selectable value
/// * `max` - Largest selectable value
/// * `default` - Initial value, `None` for `min`
///
/// # Returns
/// * `PickerResult<DigitVector>` - Seeded vector or construction error
///
/// # Example
/// ```
/// use digit_picker::engine::create_vector;
///
/// let vector = create_vector(0.0, 9.5, Some(3.5)).unwrap();
/// assert_eq!(vector.len(), 2);
/// assert_eq!(vector.decimal_point_index(), 1);
/// ```
pub fn create_vector(min: f32, max: f32, default: Option<f32>) -> PickerResult<DigitVector> {
    create_from_config(&PickerConfig::from_f32(min, max, default)?)
}

/// Creates a digit vector from configuration
///
/// Validates the range and default, decomposes the bounds into digits, shows
/// the default on the wheels and tightens every live bound.
pub fn create_from_config(config: &PickerConfig) -> PickerResult<DigitVector> {
    // Validate configuration first
    config.validate()?;

    let decimal_point = config.decimal_point();
    let bounds = BoundDigits::decompose(config.min_value, config.max_value, decimal_point);

    let mut vector = DigitVector::new(
        &bounds,
        config.min_value,
        config.max_value,
        config.effective_default(),
    );
    let tightened = settle(&mut vector);

    tracing::debug!(
        min = %config.min_value,
        max = %config.max_value,
        wheels = vector.len(),
        decimal_point,
        tightened,
        "digit vector created"
    );
    Ok(vector)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating picker sessions with fluent API
///
/// # Example
/// ```
/// use digit_picker::prelude::*;
/// use digit_picker::engine::PickerSessionBuilder;
/// use rust_decimal::Decimal;
/// use std::sync::Arc;
///
/// let session = PickerSessionBuilder::new(Decimal::ZERO, Decimal::new(95, 1))
///     .with_default(Decimal::new(35, 1))
///     .with_title("Rating")
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(session.combined_value(), 3.5);
/// ```
pub struct PickerSessionBuilder {
    config: PickerConfig,
}

impl PickerSessionBuilder {
    /// Create a new builder for the inclusive range `min..=max`
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self {
            config: PickerConfig::new(min, max),
        }
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Set the initial and reset value
    pub fn with_default(mut self, default: Decimal) -> Self {
        self.config.default_value = Some(default);
        self
    }

    /// Set the title shown above the wheels
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Add one entry to the payload echoed in action events
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config = self.config.with_param(key, value);
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply percentage configuration
    pub fn percentage() -> Self {
        Self {
            config: PickerConfig::percentage(),
        }
    }

    /// Apply whole-number configuration over `count` wheels
    pub fn digits(count: u32) -> Self {
        Self {
            config: PickerConfig::digits(count),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the picker session
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> PickerResult<PickerSession> {
        PickerSession::open(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &PickerConfig {
        &self.config
    }
}
