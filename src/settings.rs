//! Compositor settings
//!
//! Settings can be given as a raw bitmask, which keeps the layout used by
//! existing sketches:
//!
//! - bit 0: wrap flag (`SETTINGS_NOWRAP` / `SETTINGS_WRAP`)
//! - bits 1-2: blend operation (`SETTINGS_OP_ADD` / `SETTINGS_OP_MAX` /
//!   `SETTINGS_OP_COPY`)
//!
//! Bits 3-7 are ignored.

use crate::fixed::Precision;
use crate::math8::FULL_INTENSITY;

pub const SETTINGS_NOWRAP: u8 = 0x0;
pub const SETTINGS_WRAP: u8 = 0x1;
pub const SETTINGS_OP_ADD: u8 = BLEND_OP_ID_ADD << 1;
pub const SETTINGS_OP_MAX: u8 = BLEND_OP_ID_MAX << 1;
pub const SETTINGS_OP_COPY: u8 = BLEND_OP_ID_COPY << 1;

const SETTINGS_WRAP_MASK: u8 = 0x1;
const SETTINGS_OP_MASK: u8 = 0x3 << 1;

const BLEND_OP_NAME_ADD: &str = "add";
const BLEND_OP_NAME_MAX: &str = "max";
const BLEND_OP_NAME_COPY: &str = "copy";

const BLEND_OP_ID_ADD: u8 = 0;
const BLEND_OP_ID_MAX: u8 = 1;
const BLEND_OP_ID_COPY: u8 = 2;

const WRAP_MODE_NAME_NOWRAP: &str = "nowrap";
const WRAP_MODE_NAME_WRAP: &str = "wrap";

/// Error returned for invalid compositor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Precision is larger than [`crate::fixed::MAX_PRECISION`]
    PrecisionOutOfRange(u8),
    /// Blend operation bits do not name a known operation
    UnknownBlendOp(u8),
}

/// How a new color is combined with the color already on an LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BlendOp {
    /// Add channels, saturating at 255. Keeps relative brightness of
    /// overlapping fills.
    #[default]
    Add = BLEND_OP_ID_ADD,
    /// Keep the larger value of each channel
    Max = BLEND_OP_ID_MAX,
    /// Replace the existing color
    ///
    /// A fill sharing an LED with a previous fill erases its part of it.
    Copy = BLEND_OP_ID_COPY,
}

impl BlendOp {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            BLEND_OP_ID_ADD => Self::Add,
            BLEND_OP_ID_MAX => Self::Max,
            BLEND_OP_ID_COPY => Self::Copy,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => BLEND_OP_NAME_ADD,
            Self::Max => BLEND_OP_NAME_MAX,
            Self::Copy => BLEND_OP_NAME_COPY,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            BLEND_OP_NAME_ADD => Some(Self::Add),
            BLEND_OP_NAME_MAX => Some(Self::Max),
            BLEND_OP_NAME_COPY => Some(Self::Copy),
            _ => None,
        }
    }
}

/// What happens to LED indices past the end of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Out-of-range indices are left to the strip, which ignores them
    #[default]
    NoWrap,
    /// Out-of-range indices wrap around to the start (circular strips)
    Wrap,
}

impl WrapMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoWrap => WRAP_MODE_NAME_NOWRAP,
            Self::Wrap => WRAP_MODE_NAME_WRAP,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            WRAP_MODE_NAME_NOWRAP => Some(Self::NoWrap),
            WRAP_MODE_NAME_WRAP => Some(Self::Wrap),
            _ => None,
        }
    }
}

/// Wrap mode and blend operation, fixed for the compositor's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub wrap: WrapMode,
    pub blend: BlendOp,
}

impl Settings {
    pub const fn new(wrap: WrapMode, blend: BlendOp) -> Self {
        Self { wrap, blend }
    }

    /// Decode a raw settings bitmask
    pub const fn from_bits(bits: u8) -> Result<Self, ConfigError> {
        let wrap = if bits & SETTINGS_WRAP_MASK == SETTINGS_WRAP {
            WrapMode::Wrap
        } else {
            WrapMode::NoWrap
        };
        let op = (bits & SETTINGS_OP_MASK) >> 1;
        let Some(blend) = BlendOp::from_raw(op) else {
            return Err(ConfigError::UnknownBlendOp(op));
        };
        Ok(Self { wrap, blend })
    }

    /// Encode as a raw settings bitmask
    pub const fn bits(self) -> u8 {
        let wrap = match self.wrap {
            WrapMode::NoWrap => SETTINGS_NOWRAP,
            WrapMode::Wrap => SETTINGS_WRAP,
        };
        wrap | ((self.blend as u8) << 1)
    }
}

/// Configuration for the compositor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositorConfig {
    pub precision: Precision,
    pub settings: Settings,
    /// Initial global intensity (0-255)
    pub intensity: u8,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            settings: Settings::default(),
            intensity: FULL_INTENSITY,
        }
    }
}

impl CompositorConfig {
    /// Build a configuration from raw construction parameters
    pub fn from_raw(precision: u8, settings: u8) -> Result<Self, ConfigError> {
        Ok(Self {
            precision: Precision::new(precision)?,
            settings: Settings::from_bits(settings)?,
            intensity: FULL_INTENSITY,
        })
    }

    #[must_use]
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.settings.wrap = wrap;
        self
    }

    #[must_use]
    pub fn with_blend(mut self, blend: BlendOp) -> Self {
        self.settings.blend = blend;
        self
    }

    #[must_use]
    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = intensity;
        self
    }
}
