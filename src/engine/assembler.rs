// ============================================================================
// Value Assembler
// Digit vector <-> combined value
// ============================================================================

use super::propagation::settle;
use crate::domain::DigitVector;
use crate::numeric::{aligned_digits, NumericError, NumericResult};
use rust_decimal::Decimal;

/// Wheel digits as displayed, with the decimal point inserted
/// `decimal_point_index` positions from the end (e.g. `"09.5"`).
pub fn render_digits(vector: &DigitVector) -> String {
    let split = vector.len().saturating_sub(vector.decimal_point_index());
    let mut rendered = String::with_capacity(vector.len() + 1);

    for (index, slot) in vector.iter().enumerate() {
        if index == split && vector.decimal_point_index() > 0 {
            rendered.push('.');
        }
        rendered.push(char::from(b'0' + slot.value()));
    }
    rendered
}

/// Exact combined value of the wheels.
///
/// # Errors
/// - `Overflow` if the digits do not fit a 96-bit decimal
pub fn try_assemble_decimal(vector: &DigitVector) -> NumericResult<Decimal> {
    let mantissa = vector.iter().try_fold(0i128, |acc, slot| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(i128::from(slot.value())))
    });

    mantissa
        .and_then(|mantissa| {
            Decimal::try_from_i128_with_scale(mantissa, vector.decimal_point_index() as u32).ok()
        })
        .ok_or(NumericError::Overflow)
}

/// Exact combined value of the wheels.
///
/// Construction rejects bounds whose digits overflow at the picker precision
/// and the wheels never exceed the maximum, so this cannot fail on a vector
/// built by the factory.
pub fn assemble_decimal(vector: &DigitVector) -> Decimal {
    match try_assemble_decimal(vector) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(
                %err,
                wheels = vector.len(),
                decimal_point = vector.decimal_point_index(),
                "wheel digits do not fit a decimal"
            );
            Decimal::ZERO
        },
    }
}

/// Combined value as single-precision float.
pub fn assemble(vector: &DigitVector) -> f32 {
    assemble_decimal(vector)
        .to_string()
        .parse()
        .unwrap_or(f32::NAN)
}

/// Show `value` on the wheels and re-tighten every live bound.
///
/// `value` is clamped into the vector's range first, then rendered at the
/// vector's precision.
pub fn seed(vector: &mut DigitVector, value: Decimal) {
    let value = value.clamp(vector.min_value(), vector.max_value());
    let digits = aligned_digits(value, vector.decimal_point_index() as u32, vector.len());

    for (slot, digit) in vector.slots_mut().zip(digits) {
        slot.restore_initial_bounds();
        slot.set_value(digit);
    }
    settle(vector);
}

/// Put every wheel back on its default digit.
pub fn reset(vector: &mut DigitVector) {
    for slot in vector.slots_mut() {
        slot.restore_initial_bounds();
        slot.set_value(slot.default_digit());
    }
    settle(vector);
}

/// Combined value of the wheels.
#[inline]
pub fn combined_value(vector: &DigitVector) -> f32 {
    assemble(vector)
}
