//! Strip driven through user callbacks.
//!
//! For hardware without a `smart-leds` driver: the caller supplies the LED
//! count and a pair of functions that read and write packed `0x00RRGGBB`
//! colors, plus a context value handed to both.

use crate::PixelStrip;
use crate::color::{Rgb, rgb_from_u32, rgb_to_u32};

/// Reads the packed color of an LED
pub type GetPixelFn<C> = fn(context: &C, index: u16) -> u32;

/// Writes the packed color of an LED
pub type SetPixelFn<C> = fn(context: &mut C, index: u16, color: u32);

/// Strip backed by a context value and callbacks
///
/// A missing getter reads every LED as black; a missing setter drops writes.
/// Indices that do not fit a `u16` are treated as out of range.
pub struct CallbackStrip<C> {
    context: C,
    pixel_count: u16,
    get_pixel: Option<GetPixelFn<C>>,
    set_pixel: Option<SetPixelFn<C>>,
}

impl<C> CallbackStrip<C> {
    /// Create a strip with no callbacks attached
    pub const fn new(context: C, pixel_count: u16) -> Self {
        Self {
            context,
            pixel_count,
            get_pixel: None,
            set_pixel: None,
        }
    }

    /// Attach the function used to read LED colors
    #[must_use]
    pub fn with_getter(mut self, get_pixel: GetPixelFn<C>) -> Self {
        self.get_pixel = Some(get_pixel);
        self
    }

    /// Attach the function used to write LED colors
    #[must_use]
    pub fn with_setter(mut self, set_pixel: SetPixelFn<C>) -> Self {
        self.set_pixel = Some(set_pixel);
        self
    }

    pub const fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }
}

impl<C> PixelStrip for CallbackStrip<C> {
    fn pixel_count(&self) -> usize {
        usize::from(self.pixel_count)
    }

    fn pixel_color(&self, index: usize) -> Rgb {
        let (Some(get_pixel), Ok(index)) = (self.get_pixel, u16::try_from(index)) else {
            return Rgb::default();
        };
        rgb_from_u32(get_pixel(&self.context, index))
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        let (Some(set_pixel), Ok(index)) = (self.set_pixel, u16::try_from(index)) else {
            return;
        };
        set_pixel(&mut self.context, index, rgb_to_u32(color));
    }
}
