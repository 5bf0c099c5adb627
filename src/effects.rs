//! Pixel effects expressed as buffer mutations.
//!
//! These only touch the [`PixelBuffer`]; [`crate::Strip`] wraps each of them with a
//! transmit so the change becomes visible.

use crate::buffer::PixelBuffer;
use crate::colors::RAINBOW;
use crate::types::Color;

/// Every active pixel gets `color`.
pub fn solid<const C: usize>(buffer: &mut PixelBuffer<C>, color: Color) {
    buffer.fill(color);
}

/// Pixel `i` gets `RAINBOW[i % 7]`.
pub fn rainbow<const C: usize>(buffer: &mut PixelBuffer<C>) {
    buffer.fill_with(|i| RAINBOW[i % RAINBOW.len()]);
}

/// Rotates the active pixels one place towards the start of the strip, wrapping the
/// first pixel around to the end.
///
/// Returns `false` without touching the buffer when there are fewer than two active
/// pixels. Called periodically, this makes the colors march along the strip.
pub fn shift<const C: usize>(buffer: &mut PixelBuffer<C>) -> bool {
    if buffer.active_count() <= 1 {
        return false;
    }

    buffer.rotate_left(1);
    true
}
