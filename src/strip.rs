//! The LED strip: pixel buffer, frame transmission and effects.
//!
//! Provides [`Strip`], which owns the data pin, the delay and the pixel buffer. All
//! mutation goes through `&mut self`, so there is exactly one writer of the frame and
//! of the pin at any time.

use crate::buffer::PixelBuffer;
use crate::delay::PulseDelay;
use crate::effects;
use crate::encoder::Encoder;
use crate::types::{Color, Timing};
use crate::MAX_PIXELS;
use embedded_hal::digital::OutputPin;

/// A WS2812B strip on one GPIO pin.
///
/// Changes to pixels only reach the LEDs on [`update`](Self::update); the `show_*`
/// effects call it for you.
///
/// `update` blocks for the whole frame with interrupts disabled, roughly
/// `active_count * 24 * 1.3 us + 80 us`, about 1 ms for 30 pixels. Callers with
/// latency requirements should budget for the full capacity
/// (see [`Timing::frame_duration_ns`]).
///
/// # Type Parameters
/// * `P` - Output pin driving the strip's data input
/// * `D` - Delay used for pulse timing (normally [`crate::NopDelay`])
/// * `C` - Maximum number of pixels (defaults to [`MAX_PIXELS`])
pub struct Strip<P, D, const C: usize = MAX_PIXELS> {
    encoder: Encoder<P, D>,
    pixels: PixelBuffer<C>,
}

impl<P: OutputPin, D: PulseDelay, const C: usize> Strip<P, D, C> {
    /// Takes the data pin and a calibrated delay, using [`Timing::WS2812B`].
    ///
    /// The pin must already be configured as a push-pull output; it is driven low
    /// here so the line idles until the first frame.
    pub fn new(pin: P, delay: D) -> Self {
        Self::with_timing(pin, delay, Timing::WS2812B)
    }

    /// Like [`new`](Self::new), with custom pulse timing.
    pub fn with_timing(pin: P, delay: D, timing: Timing) -> Self {
        let encoder = Encoder::new(pin, delay, timing);
        let pixels = PixelBuffer::new();

        info!(
            "WS2812B initialization complete, capacity {}, {} active",
            C,
            pixels.active_count()
        );

        Self { encoder, pixels }
    }

    /// Sets the number of active pixels, clamped to `C`.
    pub fn set_active_count(&mut self, count: usize) {
        self.pixels.set_active_count(count);
    }

    /// Number of active pixels.
    pub fn active_count(&self) -> usize {
        self.pixels.active_count()
    }

    /// Writes `color` at `index` if it is active. Does not transmit.
    pub fn set_pixel(&mut self, index: usize, color: Color) {
        self.pixels.set_pixel(index, color);
    }

    /// Returns the color at `index`, or `None` outside the active range.
    pub fn pixel(&self, index: usize) -> Option<Color> {
        self.pixels.pixel(index)
    }

    /// The pixel buffer.
    pub fn pixels(&self) -> &PixelBuffer<C> {
        &self.pixels
    }

    /// Returns the pulse timing in use.
    pub fn timing(&self) -> &Timing {
        self.encoder.timing()
    }

    /// Sends every active pixel, then the reset hold.
    ///
    /// Runs in a single critical section from the first bit through the end of the
    /// reset: an interrupt between two pulses would corrupt the LEDs' bit sampling.
    /// Nothing is reported back; the protocol has no acknowledgement.
    pub fn update(&mut self) {
        let Self { encoder, pixels } = self;

        critical_section::with(|_| {
            for &color in pixels.iter() {
                encoder.send_color(color);
            }
            encoder.reset();
        });
    }

    /// Fills every active pixel with `color` and transmits.
    pub fn show_solid(&mut self, color: Color) {
        effects::solid(&mut self.pixels, color);
        self.update();
        debug!(
            "Solid color displayed (R:{} G:{} B:{})",
            color.red,
            color.green,
            color.blue
        );
    }

    /// Fills the active pixels with the rainbow palette and transmits.
    pub fn show_rainbow(&mut self) {
        effects::rainbow(&mut self.pixels);
        self.update();
        debug!("Rainbow colors displayed");
    }

    /// Rotates the active pixels one place towards the start and transmits.
    ///
    /// Does nothing, not even a transmit, with fewer than two active pixels.
    pub fn shift_rainbow(&mut self) {
        if effects::shift(&mut self.pixels) {
            self.update();
            debug!("Rainbow colors shifted one position");
        }
    }

    /// Gives back the pin and the delay.
    pub fn release(self) -> (P, D) {
        self.encoder.release()
    }
}
