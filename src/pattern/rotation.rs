//! Rotating single-bit scans around the star
//!
//! A scan walks one quadrant at a time. Chases move a single lit bit, traces
//! leave every visited bit lit until the lap completes.

use crate::delay::BlockingDelay;
use crate::player::{Fill, Player, ScanOrder, Sweep};
use crate::port::{Quadrant, StarPorts};

const CLOCKWISE: [Sweep; 4] = [
    Sweep::new(Quadrant::UpperRight, ScanOrder::Descending),
    Sweep::new(Quadrant::LowerRight, ScanOrder::Descending),
    Sweep::new(Quadrant::LowerLeft, ScanOrder::Descending),
    Sweep::new(Quadrant::UpperLeft, ScanOrder::Ascending),
];

const COUNTER_CLOCKWISE: [Sweep; 4] = [
    Sweep::new(Quadrant::UpperLeft, ScanOrder::Descending),
    Sweep::new(Quadrant::LowerLeft, ScanOrder::Ascending),
    Sweep::new(Quadrant::LowerRight, ScanOrder::Ascending),
    Sweep::new(Quadrant::UpperRight, ScanOrder::Ascending),
];

impl<P: StarPorts, D: BlockingDelay> Player<P, D> {
    /// Single lit bit running clockwise
    pub fn chase_cw(&mut self, count: u32) {
        self.chase(&CLOCKWISE, count);
    }

    /// Single lit bit running counter-clockwise
    pub fn chase_ccw(&mut self, count: u32) {
        self.chase(&COUNTER_CLOCKWISE, count);
    }

    /// Fill the star clockwise, then clear it
    pub fn trace_cw(&mut self, count: u32) {
        self.trace(&CLOCKWISE, count);
    }

    /// Fill the star counter-clockwise, then clear it
    pub fn trace_ccw(&mut self, count: u32) {
        self.trace(&COUNTER_CLOCKWISE, count);
    }

    fn chase(&mut self, legs: &[Sweep], count: u32) {
        let step = self.timings().fast;
        self.all_off();
        for _ in 0..count {
            for leg in legs {
                self.sweep(core::slice::from_ref(leg), Fill::Replace, step);
                self.darken(leg.quadrant);
            }
        }
    }

    fn trace(&mut self, legs: &[Sweep], count: u32) {
        let step = self.timings().fast;
        let settle = self.timings().settle;
        self.all_off();
        for _ in 0..count {
            for leg in legs {
                self.sweep(core::slice::from_ref(leg), Fill::Accumulate, step);
            }
            self.all_off();
            self.wait(settle);
        }
    }
}
