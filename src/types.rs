//! Core value types: the pixel color and the wire pulse timing.

use crate::BITS_PER_PIXEL;
use palette::Srgb;

/// An 8-bit-per-channel RGB color.
///
/// Stored as red, green, blue. The strip receives the channels in green, red, blue
/// order; see [`crate::encoder::wire_bytes`].
pub type Color = Srgb<u8>;

/// High/low phase durations of the one-wire protocol, in nanoseconds.
///
/// A logical 1 is a long high phase followed by a short low phase, a logical 0 the
/// other way around. The receiving LEDs tolerate a window around each nominal value,
/// so these are targets for the delay primitive, not hard thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// High phase of a logical 0.
    pub t0h: u32,
    /// Low phase of a logical 0.
    pub t0l: u32,
    /// High phase of a logical 1.
    pub t1h: u32,
    /// Low phase of a logical 1.
    pub t1l: u32,
    /// Sustained low that latches the frame.
    pub reset: u32,
}

impl Timing {
    /// WS2812B nominal timing.
    ///
    /// Both bit shapes share a 1300 ns period. The reset hold is 80 us, well above
    /// the ~50 us the LEDs need to latch.
    pub const WS2812B: Self = Self {
        t0h: 350,
        t0l: 950,
        t1h: 700,
        t1l: 600,
        reset: 80_000,
    };

    /// Returns `(high_ns, low_ns)` for the given bit value.
    #[inline(always)]
    pub const fn shape(&self, bit: bool) -> (u32, u32) {
        if bit {
            (self.t1h, self.t1l)
        } else {
            (self.t0h, self.t0l)
        }
    }

    /// Total period of a logical 1.
    pub const fn bit_period_one(&self) -> u64 {
        self.t1h as u64 + self.t1l as u64
    }

    /// Total period of a logical 0.
    pub const fn bit_period_zero(&self) -> u64 {
        self.t0h as u64 + self.t0l as u64
    }

    /// Nominal time one `update()` of `pixels` pixels keeps the CPU busy, reset included.
    ///
    /// Useful for budgeting worst-case latency before calling an effect from a
    /// time-sensitive context. Saturates at `u64::MAX`.
    pub fn frame_duration_ns(&self, pixels: usize) -> u64 {
        let period = self.bit_period_one().max(self.bit_period_zero());
        (pixels as u64)
            .saturating_mul(BITS_PER_PIXEL as u64)
            .saturating_mul(period)
            .saturating_add(self.reset as u64)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing::WS2812B
    }
}
