#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelStrip;
use crate::color::{Rgb, blend_colors, scale_color};
use crate::fixed::Precision;
use crate::settings::{BlendOp, CompositorConfig, ConfigError, WrapMode};

/// Sub-pixel compositor
///
/// Paints colors at fixed-point locations on a strip. A fill that starts or
/// ends inside an LED lights that LED only in proportion to the part it
/// covers, so moving a fill by a fraction of an LED produces a smooth
/// change in brightness instead of a jump.
///
/// The compositor holds no pixel data; the strip is the only source of
/// current colors.
pub struct Compositor<S: PixelStrip> {
    strip: S,
    precision: Precision,
    wrap: WrapMode,
    blend: BlendOp,
    intensity: u8,
}

impl<S: PixelStrip> Compositor<S> {
    /// Create a new compositor over a strip
    pub fn new(strip: S, config: &CompositorConfig) -> Self {
        Self {
            strip,
            precision: config.precision,
            wrap: config.settings.wrap,
            blend: config.settings.blend,
            intensity: config.intensity,
        }
    }

    /// Create a compositor from a raw precision and settings bitmask
    ///
    /// See [`crate::settings`] for the bitmask layout.
    pub fn from_raw(precision: u8, settings: u8, strip: S) -> Result<Self, ConfigError> {
        let config = CompositorConfig::from_raw(precision, settings).inspect_err(|_err| {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Compositor.from_raw] rejected precision {:?} settings {:?}: {:?}",
                precision, settings, _err
            );
        })?;
        Ok(Self::new(strip, &config))
    }

    /// Number of fractional bits in a location
    pub const fn precision(&self) -> u8 {
        self.precision.bits()
    }

    /// Fixed-point distance of one whole LED
    pub const fn one(&self) -> u16 {
        self.precision.one()
    }

    /// Mask selecting the fractional part of a location
    pub const fn fraction_mask(&self) -> u16 {
        self.precision.fraction_mask()
    }

    /// Length of the strip in fixed-point units
    ///
    /// Saturates at `u32::MAX`.
    pub fn length(&self) -> u32 {
        let count = u32::try_from(self.strip.pixel_count()).unwrap_or(u32::MAX);
        self.precision.to_fixed(count)
    }

    pub const fn wrap_mode(&self) -> WrapMode {
        self.wrap
    }

    pub const fn blend_op(&self) -> BlendOp {
        self.blend
    }

    pub const fn intensity(&self) -> u8 {
        self.intensity
    }

    /// Set the global intensity (0-255) applied to subsequent fills
    ///
    /// LEDs that are already painted keep their colors.
    pub fn set_intensity(&mut self, intensity: u8) {
        self.intensity = intensity;
    }

    /// Paint `color` over `width` fixed-point units starting at `location`
    ///
    /// Each touched LED receives the color scaled by the part of the LED the
    /// fill covers and by the global intensity, combined with its current
    /// color by the blend operation. Use [`Compositor::one`] as `width` to
    /// fill exactly one LED's worth.
    pub fn set_color(&mut self, location: u32, color: Rgb, mut width: u32) {
        let one = u32::from(self.precision.one());
        let mut index = usize::try_from(self.precision.index_of(location)).unwrap_or(usize::MAX);
        let mut remain = u32::from(self.precision.remaining_in_unit(location));

        let count = self.strip.pixel_count();
        if self.wrap == WrapMode::Wrap && count == 0 {
            #[cfg(feature = "esp32-log")]
            println!("[Compositor.set_color] skipping fill on empty wrapped strip");
            return;
        }

        while width > 0 {
            if self.wrap == WrapMode::Wrap {
                index %= count;
            }

            let amount = width.min(remain);
            width -= amount;

            // `amount` never exceeds `one`, which fits a u16
            #[allow(clippy::cast_possible_truncation)]
            let fraction = amount as u16;
            let source = scale_color(color, fraction, self.intensity, self.precision);
            let current = self.strip.pixel_color(index);
            self.strip
                .set_pixel_color(index, blend_colors(current, source, self.blend));

            remain = one;
            index = index.saturating_add(1);
        }
    }

    /// Get a reference to the strip.
    pub const fn strip(&self) -> &S {
        &self.strip
    }

    /// Get a mutable reference to the strip.
    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    /// Release the strip.
    pub fn into_strip(self) -> S {
        self.strip
    }
}
