//! Blocking delay primitives
//!
//! Patterns are paced by blocking the only thread of control. On bare metal
//! that is a calibrated spin loop; hosts and tests inject their own source.

use embassy_time::Duration;

/// Clock of the reference board (STC15F204EA at 11.952 MHz)
pub const DEFAULT_CLOCK_HZ: u32 = 11_952_000;

/// Spins per millisecond on the reference board (1T core)
pub const DEFAULT_SPINS_PER_MS: u32 = 700;

/// Blocking delay used to pace pattern steps
pub trait BlockingDelay {
    /// Block for the given duration
    fn delay(&mut self, duration: Duration);
}

impl<T: BlockingDelay + ?Sized> BlockingDelay for &mut T {
    fn delay(&mut self, duration: Duration) {
        (**self).delay(duration);
    }
}

/// Calibrated busy-wait loop
///
/// Timing only has to be visually plausible, so the calibration is a single
/// spins-per-millisecond factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyWait {
    spins_per_ms: u32,
}

impl Default for BusyWait {
    fn default() -> Self {
        Self::new(DEFAULT_SPINS_PER_MS)
    }
}

impl BusyWait {
    pub const fn new(spins_per_ms: u32) -> Self {
        Self { spins_per_ms }
    }

    /// Derive the spin count from the core clock and the cost of one spin
    pub const fn calibrated(clock_hz: u32, cycles_per_spin: u32) -> Self {
        let cycles_per_spin = if cycles_per_spin == 0 { 1 } else { cycles_per_spin };
        Self::new(clock_hz / 1000 / cycles_per_spin)
    }

    pub const fn spins_per_ms(&self) -> u32 {
        self.spins_per_ms
    }

    /// Number of spins needed to cover `duration`, rounded down
    pub fn spins_for(&self, duration: Duration) -> u64 {
        duration
            .as_micros()
            .saturating_mul(u64::from(self.spins_per_ms))
            / 1000
    }

    /// Spin `spins` times and return the number of spins performed
    ///
    /// Every spin passes through `black_box`: `spin_loop` alone emits no
    /// instruction on some targets.
    pub fn spin(spins: u64) -> u64 {
        let mut done = 0u64;
        for _ in 0..spins {
            done = core::hint::black_box(done + 1);
            core::hint::spin_loop();
        }
        done
    }
}

impl BlockingDelay for BusyWait {
    fn delay(&mut self, duration: Duration) {
        Self::spin(self.spins_for(duration));
    }
}

/// Delay backed by the embassy time driver
///
/// Requires a time driver to be linked in.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyDelay;

impl BlockingDelay for EmbassyDelay {
    fn delay(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}
