//! Bit, byte and pixel encoding onto the data pin.
//!
//! Provides [`Encoder`], which owns the output pin and the delay and emits the two
//! legal pulse shapes. Bytes go out most significant bit first and pixels go out in
//! green, red, blue order; both orders are fixed by the receiving LED hardware.
//!
//! Pulse durations are converted to wait counts once, in [`Encoder::new`]; sending
//! only toggles the pin and waits.
//!
//! The encoder does no interrupt masking of its own. Frame-level callers are
//! expected to run a whole frame inside one critical section (see
//! [`crate::Strip::update`]).

use crate::delay::PulseDelay;
use crate::types::{Color, Timing};
use embedded_hal::digital::OutputPin;

/// The three bytes a pixel is sent as, in wire order (green, red, blue).
#[inline(always)]
pub const fn wire_bytes(color: Color) -> [u8; 3] {
    [color.green, color.red, color.blue]
}

/// Drives one data line with software-timed pulses.
///
/// # Type Parameters
/// * `P` - Output pin the strip's data input is wired to
/// * `D` - Delay used for every high and low phase (normally [`crate::NopDelay`])
pub struct Encoder<P, D> {
    pin: P,
    delay: D,
    timing: Timing,
    counts: PhaseCounts,
}

/// `timing` converted to the delay's wait counts.
#[derive(Debug, Clone, Copy)]
struct PhaseCounts {
    t0h: u32,
    t0l: u32,
    t1h: u32,
    t1l: u32,
    reset: u32,
}

impl PhaseCounts {
    fn new(delay: &impl PulseDelay, timing: &Timing) -> Self {
        Self {
            t0h: delay.count_for(timing.t0h),
            t0l: delay.count_for(timing.t0l),
            t1h: delay.count_for(timing.t1h),
            t1l: delay.count_for(timing.t1l),
            reset: delay.count_for(timing.reset),
        }
    }
}

impl<P: OutputPin, D: PulseDelay> Encoder<P, D> {
    /// Takes the pin and drives it low so the line idles.
    pub fn new(mut pin: P, delay: D, timing: Timing) -> Self {
        pin.set_low().ok();
        let counts = PhaseCounts::new(&delay, &timing);

        Self {
            pin,
            delay,
            timing,
            counts,
        }
    }

    /// Returns the pulse timing in use.
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Emits one bit: pin high for the high phase, then low for the low phase.
    #[inline(always)]
    pub fn send_bit(&mut self, bit: bool) {
        let (high, low) = if bit {
            (self.counts.t1h, self.counts.t1l)
        } else {
            (self.counts.t0h, self.counts.t0l)
        };

        self.pin.set_high().ok();
        self.delay.wait(high);
        self.pin.set_low().ok();
        self.delay.wait(low);
    }

    /// Emits a byte, bit 7 first.
    #[inline]
    pub fn send_byte(&mut self, byte: u8) {
        for shift in (0..8).rev() {
            self.send_bit((byte >> shift) & 0x01 != 0);
        }
    }

    /// Emits one pixel as green, red, blue.
    pub fn send_color(&mut self, color: Color) {
        for byte in wire_bytes(color) {
            self.send_byte(byte);
        }
    }

    /// Holds the line low for the reset period so the strip latches what it received.
    pub fn reset(&mut self) {
        self.pin.set_low().ok();
        self.delay.wait(self.counts.reset);
    }

    /// Gives back the pin and the delay.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}
