// ============================================================================
// Picker Snapshot
// Read-only view of every wheel, for host display refresh
// ============================================================================

use super::slot::DigitSlot;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What one wheel should display and allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotView {
    pub position: usize,
    pub value: u8,
    pub live_min: u8,
    pub live_max: u8,
}

impl From<&DigitSlot> for SlotView {
    fn from(slot: &DigitSlot) -> Self {
        Self {
            position: slot.position(),
            value: slot.value(),
            live_min: slot.live_min(),
            live_max: slot.live_max(),
        }
    }
}

/// Point-in-time copy of a picker's wheels and combined value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PickerSnapshot {
    pub slots: Vec<SlotView>,
    /// Exact combined value
    pub value: Decimal,
    /// Wheel digits as shown, decimal point included (e.g. "09.5")
    pub display: String,
}

impl PickerSnapshot {
    pub fn new(slots: Vec<SlotView>, value: Decimal, display: String) -> Self {
        Self {
            slots,
            value,
            display,
        }
    }

    /// Wheels whose live range is a single digit.
    pub fn pinned_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .filter(|slot| slot.live_min == slot.live_max)
            .map(|slot| slot.position)
    }
}
