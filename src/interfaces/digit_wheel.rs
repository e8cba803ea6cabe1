// ============================================================================
// Digit Wheel Interface
// Contract for the host's per-position input widget
// ============================================================================

use crate::domain::DigitVector;

/// A host widget showing one digit, spun by the user.
///
/// The engine never drives input through this trait; the host reports wheel
/// changes with `on_slot_changed` and then pushes the resulting state back
/// with [`sync_wheels`].
pub trait DigitWheel {
    /// Digit currently shown
    fn value(&self) -> u8;

    /// Show `value`
    fn set_value(&mut self, value: u8);

    /// Limit the wheel to `live_min..=live_max`
    fn set_live_bounds(&mut self, live_min: u8, live_max: u8);
}

/// Push every slot's live range and value into the matching wheel.
///
/// Wheels and slots pair up by position; extra wheels on either side are left
/// alone. Returns the number of wheels whose value had to change.
pub fn sync_wheels<W: DigitWheel>(vector: &DigitVector, wheels: &mut [W]) -> usize {
    let mut corrected = 0;

    for (slot, wheel) in vector.iter().zip(wheels.iter_mut()) {
        // Bounds first: a widget may clamp its value against the old range
        wheel.set_live_bounds(slot.live_min(), slot.live_max());
        if wheel.value() != slot.value() {
            wheel.set_value(slot.value());
            corrected += 1;
        }
    }

    if wheels.len() != vector.len() {
        tracing::warn!(
            wheels = wheels.len(),
            slots = vector.len(),
            "wheel count does not match the picker"
        );
    }
    corrected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PickerConfig;
    use crate::engine::{create_from_config, on_slot_changed};
    use rust_decimal::Decimal;

    /// Clamping wheel, like a platform number picker
    #[derive(Debug, Default)]
    struct MockWheel {
        value: u8,
        live_min: u8,
        live_max: u8,
    }

    impl DigitWheel for MockWheel {
        fn value(&self) -> u8 {
            self.value
        }

        fn set_value(&mut self, value: u8) {
            self.value = value.clamp(self.live_min, self.live_max);
        }

        fn set_live_bounds(&mut self, live_min: u8, live_max: u8) {
            self.live_min = live_min;
            self.live_max = live_max;
            self.value = self.value.clamp(live_min, live_max);
        }
    }

    #[test]
    fn test_sync_wheels() {
        let config = PickerConfig::new(Decimal::from(18), Decimal::from(99))
            .with_default(Decimal::from(42));
        let mut vector = create_from_config(&config).unwrap();
        let mut wheels: Vec<MockWheel> = (0..vector.len()).map(|_| MockWheel::default()).collect();

        assert_eq!(sync_wheels(&vector, &mut wheels), 2);
        assert_eq!((wheels[0].value, wheels[0].live_min, wheels[0].live_max), (4, 1, 9));
        assert_eq!((wheels[1].value, wheels[1].live_min, wheels[1].live_max), (2, 0, 9));

        on_slot_changed(&mut vector, 0, 1).unwrap();
        // The units wheel clamps itself onto 8 once its range narrows
        assert_eq!(sync_wheels(&vector, &mut wheels), 1);
        assert_eq!(wheels[0].value, 1);
        assert_eq!((wheels[1].value, wheels[1].live_min, wheels[1].live_max), (8, 8, 9));
    }
}
