use crate::color::Rgb;
use crate::fixed::Precision;
use crate::math8::{FULL_INTENSITY, scale_both8, scale_fraction8, scale_intensity8};

/// Scale a color by the covered part of an LED and by a global intensity
///
/// Every channel is multiplied by `fraction / precision.one()` and
/// `intensity / 255`, rounding down. A `fraction` above `one()` is treated
/// as a whole LED.
///
/// Full coverage at full intensity returns the color untouched; the other
/// shortcuts give the same result as the combined formula.
#[allow(clippy::cast_possible_truncation)]
pub fn scale_color(color: Rgb, fraction: u16, intensity: u8, precision: Precision) -> Rgb {
    let one = precision.one();
    let bits = precision.bits();
    // one() is at most 128, so the clamped fraction fits a u8
    let fraction = fraction.min(one) as u8;
    let whole = u16::from(fraction) == one;

    match (intensity == FULL_INTENSITY, whole) {
        (true, true) => color,
        (true, false) => Rgb {
            r: scale_fraction8(color.r, fraction, bits),
            g: scale_fraction8(color.g, fraction, bits),
            b: scale_fraction8(color.b, fraction, bits),
        },
        (false, true) => Rgb {
            r: scale_intensity8(color.r, intensity),
            g: scale_intensity8(color.g, intensity),
            b: scale_intensity8(color.b, intensity),
        },
        (false, false) => Rgb {
            r: scale_both8(color.r, fraction, intensity, bits),
            g: scale_both8(color.g, fraction, intensity, bits),
            b: scale_both8(color.b, fraction, intensity, bits),
        },
    }
}
