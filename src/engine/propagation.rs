// ============================================================================
// Propagation Engine
// Carry and live-bound maintenance after a single wheel changes
// ============================================================================
//
// Every wheel change runs to completion here before control returns to the
// host. The pass has three parts:
//
// 1. Carry: a wheel that wrapped from 9 to its live minimum pushes +1 into
//    the previous wheel, rolling maxed-out wheels to 0 along the way.
// 2. Max re-tightening: when the prefix equals the maximum's digits, the
//    suffix is capped by the maximum's digits until the first mismatch.
// 3. Min re-tightening: the mirror of (2) against the minimum's digits.
//
// (2) and (3) share one forward walk that tracks both prefix matches, so a
// suffix pinned by both bounds keeps both limits. Once neither bound pins
// the prefix, every later wheel is relaxed to 0..=9.

use crate::domain::{Bound, DigitSlot, DigitVector, MAX_DIGIT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Types
// ============================================================================

/// One user-driven wheel transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotChange {
    pub position: usize,
    pub old_value: u8,
    pub new_value: u8,
}

impl SlotChange {
    pub fn new(position: usize, old_value: u8, new_value: u8) -> Self {
        Self {
            position,
            old_value,
            new_value,
        }
    }
}

/// Direction of a single wheel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Up,
    Down,
}

/// What happened to a carry triggered by a 9 -> low wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CarryOutcome {
    /// No wrap, or the wrapping wheel is the most significant one
    None,
    /// The wheel at `position` took the +1
    Absorbed { position: usize },
    /// Every previous wheel was maxed out; the carry was dropped
    Overflowed,
}

/// Result of one propagation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropagationReport {
    /// The transition as applied (new value after clamping)
    pub change: SlotChange,
    pub carry: CarryOutcome,
    /// First position whose live bounds were recomputed
    pub retightened_from: Option<usize>,
    /// Number of wheels whose live bounds changed
    pub bounds_changed: usize,
}

impl PropagationReport {
    fn new(change: SlotChange) -> Self {
        Self {
            change,
            carry: CarryOutcome::None,
            retightened_from: None,
            bounds_changed: 0,
        }
    }
}

/// Which boundary rule a transition hits. Max is checked before min.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    MaxBoundary,
    MinBoundary,
    LeftBoundary,
    Interior,
}

impl Trigger {
    fn classify(slot: &DigitSlot, old_value: u8, new_value: u8) -> Self {
        if new_value == slot.live_max() {
            Trigger::MaxBoundary
        } else if new_value == slot.live_min() {
            Trigger::MinBoundary
        } else if old_value == slot.live_min() || old_value == slot.live_max() {
            Trigger::LeftBoundary
        } else {
            Trigger::Interior
        }
    }
}

/// Which global bounds the digits walked so far still equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pin {
    max: bool,
    min: bool,
}

impl Pin {
    const FULL: Pin = Pin {
        max: true,
        min: true,
    };

    #[inline]
    fn is_free(self) -> bool {
        !self.max && !self.min
    }

    #[inline]
    fn live_bounds(self, slot: &DigitSlot) -> (u8, u8) {
        let live_min = if self.min { slot.min_bound() } else { 0 };
        let live_max = if self.max { slot.max_bound() } else { MAX_DIGIT };
        (live_min, live_max)
    }

    #[inline]
    fn advance(self, slot: &DigitSlot) -> Pin {
        Pin {
            max: self.max && slot.matches_bound(Bound::Max),
            min: self.min && slot.matches_bound(Bound::Min),
        }
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Apply `change` to `vector` and restore every live bound.
///
/// The new value is written first (clamped into the wheel's live range). A
/// transition from 9 onto the live minimum is treated as a wrap and carries.
///
/// # Panics
/// If `change.position` is outside the vector.
pub fn propagate(vector: &mut DigitVector, change: SlotChange) -> PropagationReport {
    let slot = vector[change.position];
    let wrapped = change.old_value == MAX_DIGIT
        && change.new_value != change.old_value
        && change.new_value == slot.live_min();
    run(vector, change, wrapped)
}

/// Pure form of [`propagate`]: the input vector is left untouched.
pub fn propagated(vector: &DigitVector, change: SlotChange) -> (DigitVector, PropagationReport) {
    let mut next = vector.clone();
    let report = propagate(&mut next, change);
    (next, report)
}

/// Host entry point: the wheel at `position` now shows `new_value`.
///
/// Returns `None` when `position` is outside the vector, which is a host
/// contract violation; nothing is changed in that case.
pub fn on_slot_changed(
    vector: &mut DigitVector,
    position: usize,
    new_value: u8,
) -> Option<PropagationReport> {
    let Some(old_value) = vector.slot(position).map(DigitSlot::value) else {
        tracing::warn!(position, len = vector.len(), "slot change outside the picker");
        return None;
    };

    Some(propagate(
        vector,
        SlotChange::new(position, old_value, new_value),
    ))
}

/// Move the wheel at `position` one step, wrapping inside its live range.
///
/// Unlike a raw [`on_slot_changed`], the direction is known: only an upward
/// wrap from 9 carries, a downward wrap never does.
pub fn step(
    vector: &mut DigitVector,
    position: usize,
    direction: Direction,
) -> Option<PropagationReport> {
    let Some(slot) = vector.slot(position) else {
        tracing::warn!(position, len = vector.len(), "step outside the picker");
        return None;
    };

    let old_value = slot.value();
    let (new_value, wrapped) = match direction {
        Direction::Up if old_value >= slot.live_max() => (slot.live_min(), true),
        Direction::Up => (old_value + 1, false),
        Direction::Down if old_value <= slot.live_min() => (slot.live_max(), true),
        Direction::Down => (old_value - 1, false),
    };

    let carries = direction == Direction::Up
        && wrapped
        && old_value == MAX_DIGIT
        && new_value != old_value;
    Some(run(
        vector,
        SlotChange::new(position, old_value, new_value),
        carries,
    ))
}

/// Tighten every wheel from the most significant one down.
///
/// Run once after seeding; returns the number of wheels whose bounds changed.
pub(crate) fn settle(vector: &mut DigitVector) -> usize {
    if vector.is_empty() {
        return 0;
    }
    retighten_from(vector, 0)
}

// ============================================================================
// Passes
// ============================================================================

fn run(vector: &mut DigitVector, change: SlotChange, carries: bool) -> PropagationReport {
    let position = change.position;
    let new_value = vector.slot_mut(position).set_value(change.new_value);
    if new_value != change.new_value {
        tracing::warn!(
            position,
            requested = change.new_value,
            stored = new_value,
            "wheel value outside its live range, clamped"
        );
    }

    let change = SlotChange { new_value, ..change };
    let mut report = PropagationReport::new(change);

    let from = if carries {
        report.carry = carry_up(vector, position);
        match report.carry {
            CarryOutcome::Absorbed { position: target } => Some(target),
            CarryOutcome::Overflowed => Some(0),
            CarryOutcome::None => Some(position),
        }
    } else {
        match Trigger::classify(&vector[position], change.old_value, new_value) {
            Trigger::Interior => None,
            trigger => {
                tracing::trace!(position, ?trigger, "boundary rule triggered");
                Some(position)
            },
        }
    };

    if let Some(from) = from {
        report.retightened_from = Some(from);
        report.bounds_changed = retighten_from(vector, from);
    }

    tracing::debug!(
        position,
        old = change.old_value,
        new = new_value,
        carry = ?report.carry,
        bounds_changed = report.bounds_changed,
        "propagated wheel change"
    );
    report
}

/// Push +1 into the wheels before `position`.
///
/// Maxed-out wheels roll to 0 and pass the carry on; if the run reaches the
/// most significant wheel while it is still maxed, the carry is dropped.
fn carry_up(vector: &mut DigitVector, position: usize) -> CarryOutcome {
    let Some(mut target) = vector.previous(position) else {
        return CarryOutcome::None;
    };
    vector.slot_mut(position).release_live_min();

    loop {
        let slot = vector.slot_mut(target);
        if slot.value() < slot.live_max() {
            slot.set_value(slot.value() + 1);
            return CarryOutcome::Absorbed { position: target };
        }

        match vector.previous(target) {
            Some(before) => {
                let slot = vector.slot_mut(target);
                slot.release_live_min();
                slot.set_value(0);
                target = before;
            },
            None => {
                tracing::debug!(position, "carry overflowed past the top wheel");
                return CarryOutcome::Overflowed;
            },
        }
    }
}

/// Does every wheel before `position` equal the bound digits?
fn prefix_pin(vector: &DigitVector, position: usize) -> Pin {
    let mut pin = Pin::FULL;
    let mut cursor = vector.previous(position);

    while let Some(p) = cursor {
        pin = pin.advance(&vector[p]);
        if pin.is_free() {
            break;
        }
        cursor = vector.previous(p);
    }
    pin
}

/// Recompute live bounds from `position` to the last wheel.
fn retighten_from(vector: &mut DigitVector, position: usize) -> usize {
    let mut pin = prefix_pin(vector, position);
    let mut changed = 0;
    let mut cursor = Some(position);

    while let Some(p) = cursor {
        if pin.is_free() {
            return changed + relax_from(vector, p);
        }

        let slot = vector.slot_mut(p);
        let (live_min, live_max) = pin.live_bounds(slot);
        if slot.set_live_bounds(live_min, live_max) {
            tracing::trace!(position = p, live_min, live_max, "tightened wheel");
            changed += 1;
        }
        pin = pin.advance(slot);
        cursor = vector.next(p);
    }
    changed
}

/// Reset every wheel from `position` onwards to the full 0..=9 range.
fn relax_from(vector: &mut DigitVector, position: usize) -> usize {
    let mut changed = 0;
    for slot in vector.slots_mut().skip(position) {
        if slot.set_live_bounds(0, MAX_DIGIT) {
            tracing::trace!(position = slot.position(), "relaxed wheel");
            changed += 1;
        }
    }
    changed
}
