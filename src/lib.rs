#![no_std]

pub mod color;
pub mod compositor;
pub mod fixed;
pub mod math8;
pub mod settings;
pub mod strip;

pub use compositor::Compositor;
pub use fixed::{MAX_PRECISION, Precision};
pub use settings::{BlendOp, CompositorConfig, ConfigError, Settings, WrapMode};
pub use strip::{CallbackStrip, LedBuffer, SharedStrip};

pub use color::{HueWheel, Rgb, blend_colors, hue_to_color, scale_color};

/// Abstract LED strip access
///
/// Implement this trait to let the compositor address a strip.
/// The compositor is generic over this trait.
pub trait PixelStrip {
    /// Number of LEDs in the strip
    fn pixel_count(&self) -> usize;

    /// Current color of an LED
    ///
    /// Out-of-range indices read as black.
    fn pixel_color(&self, index: usize) -> Rgb;

    /// Write the color of an LED
    ///
    /// Out-of-range indices must be ignored.
    fn set_pixel_color(&mut self, index: usize, color: Rgb);
}

impl<S: PixelStrip + ?Sized> PixelStrip for &mut S {
    fn pixel_count(&self) -> usize {
        (**self).pixel_count()
    }

    fn pixel_color(&self, index: usize) -> Rgb {
        (**self).pixel_color(index)
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        (**self).set_pixel_color(index, color);
    }
}
