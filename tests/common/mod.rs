//! Shared test infrastructure for ws2812b-bitbang integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin};
use ws2812b_bitbang::{PulseDelay, Timing};

// ============================================================================
// Signal Trace
// ============================================================================

/// One observable action on the data line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    High,
    Low,
    Wait(u32),
    /// Critical section entered
    Acquire,
    /// Critical section left
    Release,
}

/// Pin, delay and critical-section activity in the order it happened
pub type Trace = RefCell<heapless::Vec<Event, 4096>>;

thread_local! {
    static SECTION_TRACE: Cell<Option<&'static Trace>> = const { Cell::new(None) };
}

/// Creates an empty trace and makes it the one critical sections on this thread
/// record into.
pub fn new_trace() -> &'static Trace {
    let trace: &'static Trace = Box::leak(Box::new(RefCell::new(heapless::Vec::new())));
    SECTION_TRACE.with(|current| current.set(Some(trace)));
    trace
}

fn record(trace: &Trace, event: Event) {
    trace
        .borrow_mut()
        .push(event)
        .expect("trace capacity exceeded");
}

// ============================================================================
// Mock Pin and Delay
// ============================================================================

/// Output pin that appends every level change to a trace
pub struct RecordingPin<'a> {
    trace: &'a Trace,
}

impl<'a> RecordingPin<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        Self { trace }
    }
}

impl ErrorType for RecordingPin<'_> {
    type Error = Infallible;
}

impl OutputPin for RecordingPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        record(self.trace, Event::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        record(self.trace, Event::High);
        Ok(())
    }
}

/// Delay that appends every requested wait to the same trace instead of waiting
pub struct RecordingDelay<'a> {
    trace: &'a Trace,
}

impl<'a> RecordingDelay<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        Self { trace }
    }
}

/// Counts in nanoseconds, so the trace shows the requested durations
impl PulseDelay for RecordingDelay<'_> {
    fn count_for(&self, ns: u32) -> u32 {
        ns.max(1)
    }

    fn wait(&mut self, count: u32) {
        record(self.trace, Event::Wait(count));
    }
}

// ============================================================================
// Critical Section
// ============================================================================

/// Critical-section implementation that records entry and exit in the current trace
struct RecordingSection;

critical_section::set_impl!(RecordingSection);

unsafe impl critical_section::Impl for RecordingSection {
    unsafe fn acquire() -> critical_section::RawRestoreState {
        record_section(Event::Acquire);
    }

    unsafe fn release(_restore_state: critical_section::RawRestoreState) {
        record_section(Event::Release);
    }
}

fn record_section(event: Event) {
    SECTION_TRACE.with(|current| {
        if let Some(trace) = current.get() {
            record(trace, event);
        }
    });
}

// ============================================================================
// Trace Decoding
// ============================================================================

/// What the LEDs would see on the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// High then low, with phase durations in nanoseconds
    Pulse { high: u32, low: u32 },
    /// Sustained low of the given length
    Reset(u32),
}

/// Splits a trace into pulses and reset holds.
///
/// A bare `Low` that is not followed by a wait (the idle level set on construction)
/// and critical-section markers are skipped. Any other shape panics.
pub fn decode(events: &[Event]) -> Vec<Symbol> {
    let mut symbols = Vec::new();
    let mut i = 0;

    while i < events.len() {
        match &events[i..] {
            [Event::High, Event::Wait(high), Event::Low, Event::Wait(low), ..] => {
                symbols.push(Symbol::Pulse {
                    high: *high,
                    low: *low,
                });
                i += 4;
            }
            [Event::Low, Event::Wait(hold), ..] => {
                symbols.push(Symbol::Reset(*hold));
                i += 2;
            }
            [Event::Low | Event::Acquire | Event::Release, ..] => i += 1,
            rest => panic!("unexpected line activity at event {}: {:?}", i, rest),
        }
    }

    symbols
}

/// Converts pulses to bit values, checking each against the timing's two shapes
pub fn pulse_bits(symbols: &[Symbol], timing: &Timing) -> Vec<bool> {
    symbols
        .iter()
        .filter_map(|symbol| match *symbol {
            Symbol::Pulse { high, low } => {
                if (high, low) == timing.shape(true) {
                    Some(true)
                } else if (high, low) == timing.shape(false) {
                    Some(false)
                } else {
                    panic!("pulse {}/{} ns matches neither bit shape", high, low)
                }
            }
            Symbol::Reset(_) => None,
        })
        .collect()
}

/// Packs bits (MSB first) into bytes
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    assert_eq!(bits.len() % 8, 0, "bit count is not a whole number of bytes");
    bits.chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | bit as u8))
        .collect()
}

/// Number of critical sections entered in a trace
pub fn section_count(events: &[Event]) -> usize {
    events.iter().filter(|&&e| e == Event::Acquire).count()
}

/// Number of reset holds in a decoded trace
pub fn reset_count(symbols: &[Symbol]) -> usize {
    symbols
        .iter()
        .filter(|s| matches!(s, Symbol::Reset(_)))
        .count()
}
