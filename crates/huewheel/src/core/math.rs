use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert whole degrees into cyclic turns.
///
/// Degrees wrap around, so 360 and 0 both yield hue 0.0.
#[inline]
pub(crate) fn degrees_to_turns(degrees: u16) -> Float {
    (degrees % 360) as Float / 360.0
}

/// Convert cyclic turns into whole degrees `0..360`.
///
/// The result is truncated after limiting precision, so that hues converted
/// from whole degrees convert back to the same degrees.
#[inline]
pub(crate) fn turns_to_degrees(turns: Float) -> u16 {
    let degrees = turns.rem_euclid(1.0) * 360.0;
    let degrees = (degrees * Float::ROUNDING_FACTOR).round() / Float::ROUNDING_FACTOR;
    (degrees.trunc() as u16) % 360
}
