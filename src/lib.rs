#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Strip`**: Owns the data pin, the delay and the pixel buffer; transmits frames and runs effects
//! - **`PixelBuffer`**: Fixed-capacity pixel storage with a clamped active length
//! - **`Encoder`**: Emits bits (MSB first) and pixels (green, red, blue) as timed pulses
//! - **`NopDelay`**: Busy-wait delay calibrated against the CPU clock and the loop's cycle cost
//! - **`PulseDelay`**: Delay seam the encoder times pulses through, converting durations once
//! - **`Timing`**: High/low phase durations and the reset hold
//! - **`Color`**: 8-bit RGB (`Srgb<u8>`)
//! - **`effects`**: Solid fill, rainbow fill and rotation on a buffer
//!
//! Frames are sent inside a `critical-section` so no interrupt can stretch a pulse.
//! On a single-core Cortex-M target enable `cortex-m`'s
//! `critical-section-single-core` feature (or your HAL's equivalent).

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

mod fmt;

pub mod types;
pub mod colors;
pub mod delay;
pub mod encoder;
pub mod buffer;
pub mod effects;
pub mod strip;

pub use types::{Color, Timing};
pub use colors::{OFF, RAINBOW};
pub use delay::{CYCLES_PER_LOOP, DEFAULT_CPU_HZ, NopDelay, PulseDelay};
pub use encoder::{Encoder, wire_bytes};
pub use buffer::PixelBuffer;
pub use strip::Strip;

/// Default maximum number of pixels a strip can hold.
pub const MAX_PIXELS: usize = 30;

/// Number of active pixels a new buffer starts with.
pub const DEFAULT_ACTIVE_PIXELS: usize = 5;

/// Bits on the wire per pixel (three 8-bit channels).
pub const BITS_PER_PIXEL: usize = 24;
