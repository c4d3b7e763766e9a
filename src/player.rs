//! Pattern player
//!
//! Owns the ports and the delay source and provides the primitives every
//! pattern is built from. The pattern routines themselves live in
//! [`crate::pattern`].

use embassy_time::Duration;

use crate::config::StepTimings;
use crate::delay::BlockingDelay;
use crate::logging::debug;
use crate::pattern::PatternId;
use crate::port::{BITS_PER_PORT, Quadrant, SEG_OFF, SEG_ON, StarPorts};

/// Order in which whole-port operations touch the quadrants
const REFRESH_ORDER: [Quadrant; 4] = [
    Quadrant::LowerRight,
    Quadrant::LowerLeft,
    Quadrant::UpperRight,
    Quadrant::UpperLeft,
];

/// Direction of a single-bit scan across a port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOrder {
    /// Bit 0 up to bit 7
    Ascending,
    /// Bit 7 down to bit 0
    Descending,
}

impl ScanOrder {
    /// Bit index visited at `step`
    ///
    /// Steps wrap every [`BITS_PER_PORT`].
    pub const fn bit_index(self, step: u8) -> u8 {
        let step = step % BITS_PER_PORT;
        match self {
            Self::Ascending => step,
            Self::Descending => BITS_PER_PORT - 1 - step,
        }
    }

    /// One-hot mask of the bit visited at `step`
    pub const fn bit(self, step: u8) -> u8 {
        1 << self.bit_index(step)
    }
}

/// How a scanned bit combines with what is already lit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Only the scanned bit is lit
    Replace,
    /// The scanned bit joins the bits lit so far
    Accumulate,
}

/// A single-bit scan over one quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    pub quadrant: Quadrant,
    pub order: ScanOrder,
}

impl Sweep {
    pub const fn new(quadrant: Quadrant, order: ScanOrder) -> Self {
        Self { quadrant, order }
    }
}

/// Pattern player - the single owner of the LED ports
pub struct Player<P: StarPorts, D: BlockingDelay> {
    ports: P,
    delay: D,
    timings: StepTimings,
}

impl<P: StarPorts, D: BlockingDelay> Player<P, D> {
    pub const fn new(ports: P, delay: D, timings: StepTimings) -> Self {
        Self {
            ports,
            delay,
            timings,
        }
    }

    pub const fn timings(&self) -> &StepTimings {
        &self.timings
    }

    pub const fn ports(&self) -> &P {
        &self.ports
    }

    /// Release the ports and the delay source
    pub fn into_parts(self) -> (P, D) {
        (self.ports, self.delay)
    }

    /// Power-up sequence: dark star, then a short settle
    pub fn setup(&mut self) {
        debug!("bling-star: setup");
        self.all_off();
        self.wait(self.timings.settle);
    }

    /// Play a pattern `count` times
    pub fn play(&mut self, pattern: PatternId, count: u32) {
        debug!(
            "bling-star: pattern {} (id {}) x{}",
            pattern.as_str(),
            pattern as u8,
            count
        );
        pattern.play(self, count);
    }

    /// Turn every LED off
    pub fn all_off(&mut self) {
        for quadrant in REFRESH_ORDER {
            self.ports.write(quadrant, SEG_OFF);
        }
    }

    /// Turn every LED on
    pub fn all_on(&mut self) {
        for quadrant in REFRESH_ORDER {
            self.ports.write(quadrant, SEG_ON);
        }
    }

    /// Invert every LED
    pub fn all_toggle(&mut self) {
        for quadrant in REFRESH_ORDER {
            let value = self.ports.read(quadrant);
            self.ports.write(quadrant, !value);
        }
    }

    /// Light a whole quadrant
    pub fn light(&mut self, quadrant: Quadrant) {
        self.ports.write(quadrant, SEG_ON);
    }

    /// Darken a whole quadrant
    pub fn darken(&mut self, quadrant: Quadrant) {
        self.ports.write(quadrant, SEG_OFF);
    }

    /// Block for one step
    pub fn wait(&mut self, duration: Duration) {
        self.delay.delay(duration);
    }

    /// Scan a group of quadrants side by side
    ///
    /// Runs one pass of [`BITS_PER_PORT`] steps. Each step updates every
    /// quadrant of the group before a single delay of `step`.
    pub fn sweep(&mut self, sweeps: &[Sweep], fill: Fill, step: Duration) {
        for index in 0..BITS_PER_PORT {
            for sweep in sweeps {
                let mask = sweep.order.bit(index);
                let value = match fill {
                    Fill::Replace => !mask,
                    Fill::Accumulate => self.ports.read(sweep.quadrant) & !mask,
                };
                self.ports.write(sweep.quadrant, value);
            }
            self.wait(step);
        }
    }
}
