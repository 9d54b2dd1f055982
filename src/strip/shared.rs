//! Strip shared between execution contexts.
//!
//! The compositor itself does no locking. When a strip is touched from more
//! than one place (a render loop and an interrupt handler, for example),
//! wrap it in a [`SharedStrip`]: every access runs inside a
//! `critical-section`, so it works on any target that provides one.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::PixelStrip;
use crate::color::Rgb;

/// A strip guarded by a critical section.
///
/// `&SharedStrip<S>` is itself a [`PixelStrip`], locking once per LED access.
/// Use [`SharedStrip::with`] to hold the lock across a whole sequence of
/// accesses, for example a complete fill.
pub struct SharedStrip<S> {
    inner: Mutex<RefCell<S>>,
}

impl<S> SharedStrip<S> {
    pub const fn new(strip: S) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(strip)),
        }
    }

    /// Run `f` with exclusive access to the strip.
    ///
    /// Calls must not nest.
    pub fn with<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow(cs).borrow_mut()))
    }

    pub fn into_inner(self) -> S {
        self.inner.into_inner().into_inner()
    }
}

impl<S: PixelStrip> PixelStrip for &SharedStrip<S> {
    fn pixel_count(&self) -> usize {
        self.with(|strip| strip.pixel_count())
    }

    fn pixel_color(&self, index: usize) -> Rgb {
        self.with(|strip| strip.pixel_color(index))
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        self.with(|strip| strip.set_pixel_color(index, color));
    }
}
