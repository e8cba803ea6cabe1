// ============================================================================
// Bound Decomposer
// Splits the picker range into per-position bound digits
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};
use smallvec::SmallVec;
use std::str::FromStr;

/// Padding character used to align a shorter rendering with the maximum.
pub const FILLER: char = '-';

/// Digit buffer, one entry per wheel. Inline up to eight wheels.
pub type DigitBuf = SmallVec<[u8; 8]>;

// ============================================================================
// Conversion
// ============================================================================

/// Convert an `f32` into an exact decimal through its shortest round-trip
/// rendering, so `0.1f32` becomes `0.1` rather than its binary expansion.
///
/// # Errors
/// - `NonFinite` for NaN or infinity
/// - `Overflow` if the value does not fit a 96-bit decimal
/// - `Negative` for values below zero
pub fn decimal_from_f32(value: f32) -> NumericResult<Decimal> {
    if !value.is_finite() {
        return Err(NumericError::NonFinite);
    }

    let decimal = Decimal::from_str(&value.to_string()).map_err(|_| NumericError::Overflow)?;
    non_negative(decimal)
}

/// Reject negative decimals and fold `-0` into `0`.
pub fn non_negative(value: Decimal) -> NumericResult<Decimal> {
    if value.is_zero() {
        Ok(Decimal::ZERO)
    } else if value.is_sign_negative() {
        Err(NumericError::Negative)
    } else {
        Ok(value)
    }
}

/// Number of fractional digits once trailing zeros are stripped.
#[inline]
pub fn minimal_scale(value: Decimal) -> u32 {
    value.normalize().scale()
}

/// `value` rounded and rescaled to exactly `decimal_point` fractional digits.
///
/// # Errors
/// - `Overflow` if the mantissa at that scale does not fit a 96-bit decimal
pub fn at_scale(value: Decimal, decimal_point: u32) -> NumericResult<Decimal> {
    let mut scaled =
        value.round_dp_with_strategy(decimal_point, RoundingStrategy::MidpointAwayFromZero);
    // rescale silently keeps a smaller scale when the mantissa would overflow
    scaled.rescale(decimal_point);
    if scaled.scale() == decimal_point {
        Ok(scaled)
    } else {
        Err(NumericError::Overflow)
    }
}

/// Render `value` with exactly `decimal_point` fractional digits.
///
/// Extra precision is rounded half away from zero; with `decimal_point == 0`
/// the result carries no decimal point at all.
pub fn render(value: Decimal, decimal_point: u32) -> String {
    let mut rounded =
        value.round_dp_with_strategy(decimal_point, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimal_point);
    rounded.to_string()
}

/// Left-pad `rendered` with [`FILLER`] to `width` characters and map every
/// non-`.` character to a digit, using `unparsed` where no digit is present.
fn padded_digits(rendered: &str, width: usize, unparsed: u8) -> DigitBuf {
    let len = rendered.chars().count();
    let padding = width.saturating_sub(len);
    let excess = len.saturating_sub(width);

    std::iter::repeat(FILLER)
        .take(padding)
        .chain(rendered.chars().skip(excess))
        .filter(|c| *c != '.')
        .map(|c| c.to_digit(10).map_or(unparsed, |d| d as u8))
        .collect()
}

/// Digits of `value` at `decimal_point` precision, right-aligned to `wheels`
/// positions with leading zeros.
pub fn aligned_digits(value: Decimal, decimal_point: u32, wheels: usize) -> DigitBuf {
    let width = wheels + usize::from(decimal_point > 0);
    padded_digits(&render(value, decimal_point), width, 0)
}

// ============================================================================
// Bound Digits
// ============================================================================

/// Authoritative per-position digits of the picker's minimum and maximum.
///
/// Both sequences have one entry per wheel, most significant first. The
/// minimum is left-padded so it lines up position-for-position with the
/// maximum; padded positions resolve to `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundDigits {
    min_digits: DigitBuf,
    max_digits: DigitBuf,
    decimal_point: u32,
    /// Character width of the maximum's rendering, decimal point included
    width: usize,
}

impl BoundDigits {
    /// Decompose `[min, max]` at the given fractional precision.
    ///
    /// The caller guarantees `min <= max`; both are non-negative.
    pub fn decompose(min: Decimal, max: Decimal, decimal_point: u32) -> Self {
        let max_rendered = render(max, decimal_point);
        let width = max_rendered.chars().count();

        let max_digits = padded_digits(&max_rendered, width, 9);
        let min_digits = padded_digits(&render(min, decimal_point), width, 0);

        tracing::trace!(
            %max_rendered,
            decimal_point,
            wheels = max_digits.len(),
            "decomposed picker bounds"
        );

        Self {
            min_digits,
            max_digits,
            decimal_point,
            width,
        }
    }

    /// Digits of `value` aligned with the bounds (used for defaults).
    pub fn digits_of(&self, value: Decimal) -> DigitBuf {
        padded_digits(&render(value, self.decimal_point), self.width, 0)
    }

    #[inline]
    pub fn min_digits(&self) -> &[u8] {
        &self.min_digits
    }

    #[inline]
    pub fn max_digits(&self) -> &[u8] {
        &self.max_digits
    }

    /// Number of wheels (decimal point excluded).
    #[inline]
    pub fn len(&self) -> usize {
        self.max_digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max_digits.is_empty()
    }

    /// Number of fractional digits.
    #[inline]
    pub fn decimal_point(&self) -> u32 {
        self.decimal_point
    }

    /// Count of least-significant wheels that sit after the decimal point.
    #[inline]
    pub fn decimal_point_index(&self) -> usize {
        self.decimal_point as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn digits_value(digits: &[u8]) -> u64 {
        digits.iter().fold(0, |acc, d| acc * 10 + u64::from(*d))
    }

    #[test]
    fn test_decimal_from_f32() {
        assert_eq!(decimal_from_f32(0.1).unwrap(), Decimal::new(1, 1));
        assert_eq!(decimal_from_f32(25.0).unwrap(), Decimal::from(25));
        assert_eq!(decimal_from_f32(9.5).unwrap(), Decimal::new(95, 1));
        assert_eq!(decimal_from_f32(-0.0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_decimal_from_f32_invalid() {
        assert_eq!(decimal_from_f32(f32::NAN), Err(NumericError::NonFinite));
        assert_eq!(decimal_from_f32(f32::INFINITY), Err(NumericError::NonFinite));
        assert_eq!(decimal_from_f32(-1.5), Err(NumericError::Negative));
        assert_eq!(decimal_from_f32(f32::MAX), Err(NumericError::Overflow));
    }

    #[test]
    fn test_minimal_scale() {
        assert_eq!(minimal_scale(Decimal::new(2500, 2)), 0);
        assert_eq!(minimal_scale(Decimal::new(950, 2)), 1);
        assert_eq!(minimal_scale(Decimal::new(125, 3)), 3);
    }

    #[test]
    fn test_render() {
        assert_eq!(render(Decimal::from(25), 0), "25");
        assert_eq!(render(Decimal::new(2500, 2), 0), "25");
        assert_eq!(render(Decimal::from(100), 0), "100");
        assert_eq!(render(Decimal::new(95, 1), 2), "9.50");
        assert_eq!(render(Decimal::ZERO, 1), "0.0");
        assert_eq!(render(Decimal::new(125, 2), 1), "1.3");
    }

    #[test]
    fn test_at_scale() {
        assert_eq!(at_scale(Decimal::new(95, 1), 2).unwrap().to_string(), "9.50");
        assert_eq!(at_scale(Decimal::new(125, 2), 1), Ok(Decimal::new(13, 1)));

        let wide = Decimal::from_i128_with_scale(10i128.pow(27), 0);
        assert_eq!(at_scale(wide, 1).unwrap().scale(), 1);

        let too_wide = Decimal::from_i128_with_scale(10i128.pow(20), 0);
        assert_eq!(at_scale(too_wide, 10), Err(NumericError::Overflow));
        assert_eq!(at_scale(wide, 2), Err(NumericError::Overflow));
    }

    #[test]
    fn test_decompose_integer_range() {
        let bounds = BoundDigits::decompose(Decimal::ZERO, Decimal::from(25), 0);
        assert_eq!(bounds.max_digits(), &[2, 5]);
        // "0" pads to "-0"; the filler resolves to 0
        assert_eq!(bounds.min_digits(), &[0, 0]);
        assert_eq!(bounds.decimal_point_index(), 0);
        assert_eq!(bounds.len(), 2);
    }

    #[test]
    fn test_decompose_decimal_range() {
        let bounds = BoundDigits::decompose(Decimal::new(125, 2), Decimal::new(1050, 2), 2);
        assert_eq!(bounds.max_digits(), &[1, 0, 5, 0]);
        assert_eq!(bounds.min_digits(), &[0, 1, 2, 5]);
        assert_eq!(bounds.decimal_point_index(), 2);
    }

    #[test]
    fn test_digits_of_default() {
        let bounds = BoundDigits::decompose(Decimal::from(18), Decimal::from(250), 0);
        assert_eq!(bounds.min_digits(), &[0, 1, 8]);
        assert_eq!(bounds.digits_of(Decimal::from(42)).as_slice(), &[0, 4, 2]);
        assert_eq!(bounds.digits_of(Decimal::new(425, 1)).as_slice(), &[0, 4, 3]);
    }

    #[test]
    fn test_aligned_digits() {
        assert_eq!(aligned_digits(Decimal::new(95, 1), 1, 3).as_slice(), &[0, 9, 5]);
        assert_eq!(aligned_digits(Decimal::from(7), 0, 2).as_slice(), &[0, 7]);
    }

    quickcheck! {
        fn prop_integer_bounds_align(a: u32, b: u32) -> bool {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let bounds = BoundDigits::decompose(Decimal::from(lo), Decimal::from(hi), 0);

            bounds.min_digits().len() == bounds.max_digits().len()
                && digits_value(bounds.max_digits()) == u64::from(hi)
                && digits_value(bounds.min_digits()) == u64::from(lo)
        }

        fn prop_digits_are_decimal(a: u32, scale: u8) -> bool {
            let scale = u32::from(scale % 4);
            let value = Decimal::new(i64::from(a), scale);
            let bounds = BoundDigits::decompose(Decimal::ZERO, value, scale);

            bounds.max_digits().iter().all(|d| *d <= 9)
                && bounds.len() > bounds.decimal_point_index()
        }
    }
}
