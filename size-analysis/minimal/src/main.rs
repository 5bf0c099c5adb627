#![no_std]
#![no_main]

use core::convert::Infallible;
use core::hint::black_box;
use cortex_m_rt::entry;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use panic_halt as _;
use ws2812b_bitbang::colors::{BLUE, RED};
use ws2812b_bitbang::{MAX_PIXELS, NopDelay, Strip};

// ============================================================================
// Minimal Pin Implementation
// ============================================================================

/// Output pin whose level is kept opaque to the optimizer, standing in for a GPIO
/// data register
pub struct MinimalPin;

impl ErrorType for MinimalPin {
    type Error = Infallible;
}

impl OutputPin for MinimalPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        black_box(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        black_box(true);
        Ok(())
    }
}

// ============================================================================
// Strip Usage
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn drive_strip() -> ! {
    let mut strip: Strip<_, _> = Strip::new(MinimalPin, NopDelay::default());

    strip.set_active_count(MAX_PIXELS);
    strip.show_solid(RED);
    strip.set_pixel(0, BLUE);
    strip.update();
    strip.show_rainbow();

    let mut delay = NopDelay::default();
    loop {
        delay.delay_ms(500);
        strip.shift_rainbow();
    }
}

#[entry]
fn main() -> ! {
    drive_strip()
}
