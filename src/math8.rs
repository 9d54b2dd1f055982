//! 8-bit channel arithmetic
//!
//! All scaling rounds down.

/// Full-scale intensity (1.0)
pub const FULL_INTENSITY: u8 = 255;

/// Scale a channel by `fraction / 2^precision`
///
/// `fraction` must not exceed `2^precision`.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale_fraction8(value: u8, fraction: u8, precision: u8) -> u8 {
    ((value as u16 * fraction as u16) >> precision) as u8
}

/// Scale a channel by `intensity / 255`
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale_intensity8(value: u8, intensity: u8) -> u8 {
    ((value as u16 * intensity as u16) / FULL_INTENSITY as u16) as u8
}

/// Scale a channel by `fraction / 2^precision` and `intensity / 255` at once
///
/// The product `fraction * intensity` is applied in a single division, so
/// the result only carries one truncation.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale_both8(value: u8, fraction: u8, intensity: u8, precision: u8) -> u8 {
    let numerator = fraction as u32 * intensity as u32;
    let denominator = (FULL_INTENSITY as u32) << precision;
    ((value as u32 * numerator) / denominator) as u8
}

/// Add two channels, saturating at 255
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Larger of two channels
#[inline]
pub const fn max8(a: u8, b: u8) -> u8 {
    if a > b { a } else { b }
}
