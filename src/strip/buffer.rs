//! In-memory strip for `smart-leds` drivers.
//!
//! `smart-leds` drivers are write-only: they take a whole frame at once.
//! [`LedBuffer`] keeps the frame the compositor reads from and writes to,
//! and hands it to the driver on [`LedBuffer::write_to`].

use heapless::Vec;
use smart_leds::SmartLedsWrite;

use crate::PixelStrip;
use crate::color::Rgb;

/// Error returned when a buffer is asked to hold more LEDs than it can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    pub requested: usize,
    pub capacity: usize,
}

/// Fixed-capacity frame buffer with a runtime length
///
/// N is the maximum number of LEDs the buffer can hold
#[derive(Debug, Clone)]
pub struct LedBuffer<const N: usize> {
    pixels: Vec<Rgb, N>,
}

impl<const N: usize> LedBuffer<N> {
    /// Create a buffer of `N` black LEDs
    pub fn new() -> Self {
        let mut pixels = Vec::new();
        let _ = pixels.resize_default(N);
        Self { pixels }
    }

    /// Create a buffer of `len` black LEDs
    pub fn with_len(len: usize) -> Result<Self, CapacityError> {
        let mut buffer = Self { pixels: Vec::new() };
        buffer.set_len(len)?;
        Ok(buffer)
    }

    /// Change the number of LEDs
    ///
    /// New LEDs start black.
    pub fn set_len(&mut self, len: usize) -> Result<(), CapacityError> {
        self.pixels
            .resize(len, Rgb::default())
            .map_err(|()| CapacityError {
                requested: len,
                capacity: N,
            })
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Turn every LED off
    pub fn clear(&mut self) {
        self.fill(Rgb::default());
    }

    /// Set every LED to one color
    pub fn fill(&mut self, color: Rgb) {
        for pixel in &mut self.pixels {
            *pixel = color;
        }
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Send the frame to a LED driver
    pub fn write_to<W>(&self, driver: &mut W) -> Result<(), W::Error>
    where
        W: SmartLedsWrite,
        W::Color: From<Rgb>,
    {
        driver.write(self.pixels.iter().copied())
    }
}

impl<const N: usize> Default for LedBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelStrip for LedBuffer<N> {
    fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    fn pixel_color(&self, index: usize) -> Rgb {
        self.pixels.get(index).copied().unwrap_or_default()
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }
}
