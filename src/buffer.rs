//! Fixed-capacity pixel storage with a mutable active length.

use crate::colors::OFF;
use crate::types::Color;
use crate::{DEFAULT_ACTIVE_PIXELS, MAX_PIXELS};
use heapless::Vec;

/// The frame of pixel colors sent to the strip.
///
/// Stores `C` colors. Only the first [`active_count`](Self::active_count) pixels are
/// addressable and transmitted; the rest keep their colors and show again when the
/// active count grows. Writes outside the active range are ignored rather than
/// reported: a caller iterating with a stale count is common and harmless.
///
/// # Type Parameters
/// * `C` - Maximum number of pixels (defaults to [`MAX_PIXELS`])
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer<const C: usize = MAX_PIXELS> {
    pixels: Vec<Color, C>,
    active: usize,
}

impl<const C: usize> PixelBuffer<C> {
    /// Creates a buffer with [`DEFAULT_ACTIVE_PIXELS`] active pixels (fewer if `C`
    /// is smaller), all off.
    pub fn new() -> Self {
        Self {
            pixels: core::iter::repeat_n(OFF, C).collect(),
            active: DEFAULT_ACTIVE_PIXELS.min(C),
        }
    }

    /// Maximum number of pixels.
    pub const fn capacity(&self) -> usize {
        C
    }

    /// Number of active pixels.
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Sets the number of active pixels, clamped to the capacity.
    ///
    /// Colors outside the new active range are kept, not cleared.
    pub fn set_active_count(&mut self, count: usize) {
        let count = if count > C {
            warn!("LED count {} exceeds limit, set to maximum: {}", count, C);
            C
        } else {
            count
        };

        self.active = count;
        info!("LED count set to: {}", count);
    }

    /// Writes `color` at `index` if it is active. Does not transmit.
    pub fn set_pixel(&mut self, index: usize, color: Color) {
        if let Some(slot) = self.active_mut().get_mut(index) {
            *slot = color;
        }
    }

    /// Returns the color at `index`, or `None` outside the active range.
    pub fn pixel(&self, index: usize) -> Option<Color> {
        self.as_slice().get(index).copied()
    }

    /// The active pixels, in strip order.
    pub fn as_slice(&self) -> &[Color] {
        &self.pixels[..self.active]
    }

    /// Iterates over the active pixels.
    pub fn iter(&self) -> core::slice::Iter<'_, Color> {
        self.as_slice().iter()
    }

    /// Sets every active pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.active_mut().fill(color);
    }

    /// Sets every active pixel to `f(index)`.
    pub fn fill_with(&mut self, mut f: impl FnMut(usize) -> Color) {
        for (index, slot) in self.active_mut().iter_mut().enumerate() {
            *slot = f(index);
        }
    }

    /// Rotates the active pixels left by `mid` places: the pixel at `mid % len`
    /// becomes the first one and the first one moves towards the end.
    pub fn rotate_left(&mut self, mid: usize) {
        let len = self.active;
        if len > 1 {
            self.active_mut().rotate_left(mid % len);
        }
    }

    fn active_mut(&mut self) -> &mut [Color] {
        &mut self.pixels[..self.active]
    }
}

impl<const C: usize> Default for PixelBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const C: usize> IntoIterator for &'a PixelBuffer<C> {
    type Item = &'a Color;
    type IntoIter = core::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
