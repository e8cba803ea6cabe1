// ============================================================================
// Digit Slot Domain Model
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest value a single wheel can show.
pub const MAX_DIGIT: u8 = 9;

/// Selects one side of the picker range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bound {
    Min,
    Max,
}

/// One decimal position of the picker.
///
/// `value` always sits inside `live_min..=live_max`; narrowing the live range
/// pulls the value along, the way a wheel widget clamps when its range shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitSlot {
    /// 0 = most significant
    position: usize,
    value: u8,
    live_min: u8,
    live_max: u8,
    /// Digit of the global minimum at this position
    min_bound: u8,
    /// Digit of the global maximum at this position
    max_bound: u8,
    /// Digit of the session default at this position
    default_digit: u8,
}

impl DigitSlot {
    pub(crate) fn new(position: usize, min_bound: u8, max_bound: u8, default_digit: u8) -> Self {
        let mut slot = Self {
            position,
            value: 0,
            live_min: 0,
            live_max: MAX_DIGIT,
            min_bound,
            max_bound,
            default_digit,
        };
        slot.restore_initial_bounds();
        slot.set_value(default_digit);
        slot
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[inline]
    pub fn live_min(&self) -> u8 {
        self.live_min
    }

    #[inline]
    pub fn live_max(&self) -> u8 {
        self.live_max
    }

    #[inline]
    pub fn min_bound(&self) -> u8 {
        self.min_bound
    }

    #[inline]
    pub fn max_bound(&self) -> u8 {
        self.max_bound
    }

    #[inline]
    pub fn default_digit(&self) -> u8 {
        self.default_digit
    }

    /// Authoritative digit of the given global bound.
    #[inline]
    pub fn bound_digit(&self, bound: Bound) -> u8 {
        match bound {
            Bound::Min => self.min_bound,
            Bound::Max => self.max_bound,
        }
    }

    /// Currently enforced limit on the given side.
    #[inline]
    pub fn live_bound(&self, bound: Bound) -> u8 {
        match bound {
            Bound::Min => self.live_min,
            Bound::Max => self.live_max,
        }
    }

    /// Does the value equal the global bound's digit at this position?
    #[inline]
    pub fn matches_bound(&self, bound: Bound) -> bool {
        self.value == self.bound_digit(bound)
    }

    /// Is the value resting on its live limit on the given side?
    #[inline]
    pub fn is_at_live(&self, bound: Bound) -> bool {
        self.value == self.live_bound(bound)
    }

    /// Number of values the wheel can currently show.
    #[inline]
    pub fn span(&self) -> u8 {
        self.live_max - self.live_min + 1
    }

    // ========================================================================
    // Mutation (engine only)
    // ========================================================================

    /// Store `value`, clamped into the live range. Returns the stored digit.
    pub(crate) fn set_value(&mut self, value: u8) -> u8 {
        self.value = value.clamp(self.live_min, self.live_max);
        self.value
    }

    /// Replace the live range and clamp the value into it.
    ///
    /// Returns `true` if either limit changed.
    pub(crate) fn set_live_bounds(&mut self, live_min: u8, live_max: u8) -> bool {
        let live_max = live_max.min(MAX_DIGIT);
        let live_min = live_min.min(live_max);
        let changed = live_min != self.live_min || live_max != self.live_max;

        self.live_min = live_min;
        self.live_max = live_max;
        self.value = self.value.clamp(live_min, live_max);
        changed
    }

    /// Drop the min side back to 0, keeping the max side.
    pub(crate) fn release_live_min(&mut self) {
        self.live_min = 0;
    }

    /// Construction-time range: only the most significant wheel is capped.
    pub(crate) fn restore_initial_bounds(&mut self) {
        let live_max = if self.position == 0 {
            self.max_bound
        } else {
            MAX_DIGIT
        };
        self.set_live_bounds(0, live_max);
    }
}
