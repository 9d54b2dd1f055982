//! Fixed-point strip addressing
//!
//! A location on the strip is a `u32` whose low `precision` bits are a
//! fraction of one LED and whose remaining bits are the LED index.

use crate::settings::ConfigError;

/// Largest supported number of fractional bits
pub const MAX_PRECISION: u8 = 7;

/// Number of fractional bits in a fixed-point location
///
/// Guaranteed to be within `0..=MAX_PRECISION`, so `one()` always fits
/// into a `u8` fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision(u8);

impl Precision {
    /// Create a precision, rejecting values above [`MAX_PRECISION`]
    pub const fn new(bits: u8) -> Result<Self, ConfigError> {
        if bits > MAX_PRECISION {
            return Err(ConfigError::PrecisionOutOfRange(bits));
        }
        Ok(Self(bits))
    }

    /// Create a precision, clamping values above [`MAX_PRECISION`]
    pub const fn saturating(bits: u8) -> Self {
        if bits > MAX_PRECISION {
            Self(MAX_PRECISION)
        } else {
            Self(bits)
        }
    }

    /// Number of fractional bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Fixed-point distance of one whole LED (`2^bits`)
    pub const fn one(self) -> u16 {
        1 << self.0
    }

    /// Mask selecting the fractional part of a location
    pub const fn fraction_mask(self) -> u16 {
        self.one() - 1
    }

    /// LED index a location falls into
    pub const fn index_of(self, location: u32) -> u32 {
        location >> self.0
    }

    /// Fractional offset of a location inside its LED
    pub const fn fraction_of(self, location: u32) -> u16 {
        #[allow(clippy::cast_possible_truncation)]
        let fraction = (location & self.fraction_mask() as u32) as u16;
        fraction
    }

    /// Distance from a location to the start of the next LED
    pub const fn remaining_in_unit(self, location: u32) -> u16 {
        self.one() - self.fraction_of(location)
    }

    /// Fixed-point location of the start of an LED
    ///
    /// Saturates at `u32::MAX` for indices that do not fit.
    pub const fn to_fixed(self, index: u32) -> u32 {
        match index.checked_mul(1 << self.0) {
            Some(location) => location,
            None => u32::MAX,
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(4)
    }
}

impl TryFrom<u8> for Precision {
    type Error = ConfigError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}
