//! Ready-made [`PixelStrip`](crate::PixelStrip) implementations

mod buffer;
mod callback;
mod shared;

pub use buffer::{CapacityError, LedBuffer};
pub use callback::{CallbackStrip, GetPixelFn, SetPixelFn};
pub use shared::SharedStrip;
