//! Hue wheel
//!
//! A cheap red → blue → green → red rotation for generating fill colors.
//! The wheel is split into three equal phases; in each phase one channel
//! ramps up while the previous one ramps down, so exactly two channels are
//! lit at any point and their sum stays constant.

use crate::color::Rgb;
use crate::math8::FULL_INTENSITY;

/// Default number of hue steps in one full rotation
pub const DEFAULT_HUE_RANGE: u16 = 255;

/// Convert a hue to a color
///
/// `hue` is taken modulo `range`. Hue 0 is red, `range / 3` is blue and
/// `2 * range / 3` is green. Every channel is scaled by `intensity / 255`.
///
/// Ranges below 3 have no room for three phases and produce black.
#[allow(clippy::cast_possible_truncation)]
pub fn hue_to_color(hue: u16, range: u16, intensity: u8) -> Rgb {
    let phase = range / 3;
    if phase == 0 {
        return Rgb::default();
    }

    let hue = hue % range;
    let (r, g, b) = if hue < phase {
        (phase - hue, 0, hue)
    } else if hue < 2 * phase {
        let hue = hue - phase;
        (0, hue, phase - hue)
    } else {
        // Ranges not divisible by 3 leave a short tail past the last phase
        let hue = (hue - 2 * phase).min(phase);
        (hue, phase - hue, 0)
    };

    // Channels never exceed `phase`, so the scaled value fits a u8
    let scale = |channel: u16| (u32::from(channel) * u32::from(intensity) / u32::from(phase)) as u8;
    Rgb {
        r: scale(r),
        g: scale(g),
        b: scale(b),
    }
}

/// Hue wheel with a fixed range and intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueWheel {
    /// Number of hue steps in one rotation
    range: u16,
    /// Brightness of generated colors (0-255)
    intensity: u8,
}

impl Default for HueWheel {
    fn default() -> Self {
        Self {
            range: DEFAULT_HUE_RANGE,
            intensity: FULL_INTENSITY,
        }
    }
}

impl HueWheel {
    /// Set the number of hue steps in one rotation
    #[must_use]
    pub fn with_range(mut self, range: u16) -> Self {
        self.range = range;
        self
    }

    /// Set the brightness of generated colors
    #[must_use]
    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = intensity;
        self
    }

    pub const fn range(&self) -> u16 {
        self.range
    }

    /// Color at the given hue
    pub fn color(&self, hue: u16) -> Rgb {
        hue_to_color(hue, self.range, self.intensity)
    }
}
