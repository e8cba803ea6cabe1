// ============================================================================
// Digit Vector Domain Model
// ============================================================================

use super::slot::DigitSlot;
use crate::numeric::{BoundDigits, DigitBuf};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::ops::Index;

/// The ordered wheels of one picker, most significant first.
///
/// Slots live in one contiguous arena and refer to their neighbours by index
/// only (`previous` / `next`); there are no back references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitVector {
    slots: SmallVec<[DigitSlot; 8]>,
    /// Count of least-significant slots after the decimal point
    decimal_point_index: usize,
    min_value: Decimal,
    max_value: Decimal,
}

impl DigitVector {
    /// Lay out one slot per bound digit, showing the digits of `default_value`.
    ///
    /// Live bounds start in their construction form; the propagation engine's
    /// seeding pass tightens them before the vector is shown.
    pub(crate) fn new(
        bounds: &BoundDigits,
        min_value: Decimal,
        max_value: Decimal,
        default_value: Decimal,
    ) -> Self {
        let defaults = bounds.digits_of(default_value);
        let slots = bounds
            .min_digits()
            .iter()
            .zip(bounds.max_digits())
            .zip(defaults.iter())
            .enumerate()
            .map(|(position, ((min, max), default))| DigitSlot::new(position, *min, *max, *default))
            .collect();

        Self {
            slots,
            decimal_point_index: bounds.decimal_point_index(),
            min_value,
            max_value,
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Position of the next more significant slot.
    #[inline]
    pub fn previous(&self, position: usize) -> Option<usize> {
        position.checked_sub(1).filter(|p| *p < self.slots.len())
    }

    /// Position of the next less significant slot.
    #[inline]
    pub fn next(&self, position: usize) -> Option<usize> {
        let next = position + 1;
        (next < self.slots.len()).then_some(next)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn slot(&self, position: usize) -> Option<&DigitSlot> {
        self.slots.get(position)
    }

    #[inline]
    pub fn slots(&self) -> &[DigitSlot] {
        &self.slots
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, DigitSlot> {
        self.slots.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn decimal_point_index(&self) -> usize {
        self.decimal_point_index
    }

    #[inline]
    pub fn min_value(&self) -> Decimal {
        self.min_value
    }

    #[inline]
    pub fn max_value(&self) -> Decimal {
        self.max_value
    }

    /// Current digit of every slot, most significant first.
    pub fn values(&self) -> DigitBuf {
        self.slots.iter().map(DigitSlot::value).collect()
    }

    /// Panics on an out-of-range position; callers hold a checked index.
    #[inline]
    pub(crate) fn slot_mut(&mut self, position: usize) -> &mut DigitSlot {
        &mut self.slots[position]
    }

    pub(crate) fn slots_mut(&mut self) -> std::slice::IterMut<'_, DigitSlot> {
        self.slots.iter_mut()
    }
}

impl Index<usize> for DigitVector {
    type Output = DigitSlot;

    #[inline]
    fn index(&self, position: usize) -> &Self::Output {
        &self.slots[position]
    }
}

impl<'a> IntoIterator for &'a DigitVector {
    type Item = &'a DigitSlot;
    type IntoIter = std::slice::Iter<'a, DigitSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(min: i64, max: i64, default: i64) -> DigitVector {
        let (min, max, default) = (Decimal::from(min), Decimal::from(max), Decimal::from(default));
        let bounds = BoundDigits::decompose(min, max, 0);
        DigitVector::new(&bounds, min, max, default)
    }

    #[test]
    fn test_layout() {
        let v = vector(18, 250, 42);
        assert_eq!(v.len(), 3);
        assert_eq!(v.values().as_slice(), &[0, 4, 2]);
        assert_eq!(v[0].max_bound(), 2);
        assert_eq!(v[2].min_bound(), 8);
        assert_eq!(v.decimal_point_index(), 0);
    }

    #[test]
    fn test_navigation() {
        let v = vector(0, 999, 0);
        assert_eq!(v.previous(0), None);
        assert_eq!(v.previous(2), Some(1));
        assert_eq!(v.next(0), Some(1));
        assert_eq!(v.next(2), None);
        assert_eq!(v.next(7), None);
        assert_eq!(v.previous(9), None);
    }

    #[test]
    fn test_positions_are_indices() {
        let v = vector(0, 12345, 0);
        for (index, slot) in v.iter().enumerate() {
            assert_eq!(slot.position(), index);
        }
        assert!(v.slot(5).is_none());
    }
}
