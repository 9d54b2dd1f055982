use crate::color::Rgb;
use crate::math8::{max8, qadd8};
use crate::settings::BlendOp;

/// Combine a new color with the color already on an LED
///
/// # Arguments
/// * `dst` - Color currently on the LED
/// * `src` - Incoming color
/// * `op` - Per-channel combination rule
#[inline]
pub fn blend_colors(dst: Rgb, src: Rgb, op: BlendOp) -> Rgb {
    let channel: fn(u8, u8) -> u8 = match op {
        BlendOp::Copy => return src,
        BlendOp::Max => max8,
        BlendOp::Add => qadd8,
    };
    Rgb {
        r: channel(dst.r, src.r),
        g: channel(dst.g, src.g),
        b: channel(dst.b, src.b),
    }
}
