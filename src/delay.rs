//! Calibrated busy-wait delay.
//!
//! [`NopDelay`] turns a duration into a number of iterations of a fixed-cost loop.
//! The cost of one iteration is `cycles_per_loop` CPU cycles, so the iteration count
//! follows from the CPU clock. Accuracy depends entirely on both numbers matching the
//! real hardware; it is best effort.
//!
//! [`PulseDelay`] is the seam the encoder times its phases through. Durations are
//! converted to loop counts once, when the encoder is built, so no arithmetic runs
//! between pin edges.

use embedded_hal::delay::DelayNs;

/// CPU clock the default calibration assumes.
pub const DEFAULT_CPU_HZ: u32 = 24_000_000;

/// CPU cycles one iteration of the wait loop takes: a `subs` and a taken `bne` on
/// Cortex-M3/M4 running without flash wait states.
pub const CYCLES_PER_LOOP: u32 = 3;

/// A delay that converts durations into its own wait counts ahead of time.
///
/// The encoder calls [`count_for`](Self::count_for) once per pulse phase when it is
/// created and only [`wait`](Self::wait) while sending.
pub trait PulseDelay {
    /// Wait count that lasts approximately `ns` nanoseconds. Never zero.
    fn count_for(&self, ns: u32) -> u32;

    /// Busy-waits for `count` units as returned by [`count_for`](Self::count_for).
    fn wait(&mut self, count: u32);
}

/// Busy-wait delay built from a fixed-cost loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NopDelay {
    cpu_hz: u32,
    cycles_per_loop: u32,
}

impl NopDelay {
    /// Calibrates against a CPU running at `cpu_hz`, assuming [`CYCLES_PER_LOOP`].
    pub const fn new(cpu_hz: u32) -> Self {
        Self::with_loop_cost(cpu_hz, CYCLES_PER_LOOP)
    }

    /// Calibrates against a CPU running at `cpu_hz` whose wait loop takes
    /// `cycles_per_loop` cycles per iteration. Zero is treated as 1 for both.
    pub const fn with_loop_cost(cpu_hz: u32, cycles_per_loop: u32) -> Self {
        Self {
            cpu_hz: if cpu_hz == 0 { 1 } else { cpu_hz },
            cycles_per_loop: if cycles_per_loop == 0 { 1 } else { cycles_per_loop },
        }
    }

    pub const fn cpu_hz(&self) -> u32 {
        self.cpu_hz
    }

    pub const fn cycles_per_loop(&self) -> u32 {
        self.cycles_per_loop
    }

    /// Nanoseconds one loop iteration takes, rounded, never less than 1.
    pub const fn ns_per_loop(&self) -> u32 {
        let hz = self.cpu_hz as u64;
        let ns = (self.cycles_per_loop as u64 * 1_000_000_000 + hz / 2) / hz;
        if ns == 0 {
            1
        } else if ns > u32::MAX as u64 {
            u32::MAX
        } else {
            ns as u32
        }
    }

    /// Number of loop iterations that fit in `ns` nanoseconds, rounded down and
    /// never zero.
    pub const fn loops_for(&self, ns: u32) -> u32 {
        let loops = ns as u64 * self.cpu_hz as u64
            / (1_000_000_000 * self.cycles_per_loop as u64);
        if loops == 0 {
            1
        } else if loops > u32::MAX as u64 {
            u32::MAX
        } else {
            loops as u32
        }
    }

    /// Runs `loops` iterations of the wait loop, at least one.
    #[inline(always)]
    pub fn delay_loops(&mut self, loops: u32) {
        spin(loops.max(1));
    }
}

impl Default for NopDelay {
    fn default() -> Self {
        NopDelay::new(DEFAULT_CPU_HZ)
    }
}

impl PulseDelay for NopDelay {
    fn count_for(&self, ns: u32) -> u32 {
        self.loops_for(ns)
    }

    #[inline(always)]
    fn wait(&mut self, count: u32) {
        self.delay_loops(count);
    }
}

impl DelayNs for NopDelay {
    #[inline]
    fn delay_ns(&mut self, ns: u32) {
        self.delay_loops(self.loops_for(ns));
    }
}

/// `loops` must be at least 1.
#[inline(always)]
fn spin(loops: u32) {
    #[cfg(all(target_arch = "arm", target_os = "none"))]
    // SAFETY: only touches the counter register and the flags.
    unsafe {
        core::arch::asm!(
            "2:",
            "subs {0}, #1",
            "bne 2b",
            inout(reg) loops => _,
            options(nomem, nostack),
        );
    }

    #[cfg(not(all(target_arch = "arm", target_os = "none")))]
    for _ in 0..loops {
        core::hint::spin_loop();
    }
}
