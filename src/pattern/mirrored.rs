//! Mirrored two-sided traces
//!
//! Paired quadrants fill in mirrored directions within the same step. A
//! trace is a list of phases; every phase is a group of sweeps played side
//! by side.

use embassy_time::Duration;

use crate::config::StepTimings;
use crate::delay::BlockingDelay;
use crate::player::ScanOrder::{Ascending, Descending};
use crate::player::{Fill, Player, Sweep};
use crate::port::Quadrant::{LowerLeft, LowerRight, UpperLeft, UpperRight};
use crate::port::StarPorts;

/// Step length of a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pace {
    Fast,
    Medium,
}

impl Pace {
    const fn step(self, timings: &StepTimings) -> Duration {
        match self {
            Self::Fast => timings.fast,
            Self::Medium => timings.medium,
        }
    }
}

type Phase = (&'static [Sweep], Pace);

const TOP_TO_BOTTOM: [Phase; 2] = [
    (
        &[
            Sweep::new(UpperRight, Descending),
            Sweep::new(UpperLeft, Descending),
        ],
        Pace::Fast,
    ),
    (
        &[
            Sweep::new(LowerRight, Descending),
            Sweep::new(LowerLeft, Ascending),
        ],
        Pace::Fast,
    ),
];

const BOTTOM_TO_TOP: [Phase; 2] = [
    (
        &[
            Sweep::new(LowerLeft, Descending),
            Sweep::new(LowerRight, Ascending),
        ],
        Pace::Fast,
    ),
    (
        &[
            Sweep::new(UpperLeft, Ascending),
            Sweep::new(UpperRight, Ascending),
        ],
        Pace::Fast,
    ),
];

const LEFT_TO_RIGHT: [Phase; 2] = [
    (
        &[
            Sweep::new(LowerLeft, Ascending),
            Sweep::new(UpperLeft, Ascending),
        ],
        Pace::Fast,
    ),
    (
        &[
            Sweep::new(LowerRight, Ascending),
            Sweep::new(UpperRight, Descending),
        ],
        Pace::Fast,
    ),
];

const RIGHT_TO_LEFT: [Phase; 2] = [
    (
        &[
            Sweep::new(UpperRight, Ascending),
            Sweep::new(LowerRight, Descending),
        ],
        Pace::Fast,
    ),
    (
        &[
            Sweep::new(UpperLeft, Descending),
            Sweep::new(LowerLeft, Descending),
        ],
        Pace::Fast,
    ),
];

// The left/right converging and diverging variants share these programs
// with their top/bottom counterparts.
const OUTSIDE_IN: [Phase; 1] = [(
    &[
        Sweep::new(UpperRight, Descending),
        Sweep::new(UpperLeft, Descending),
        Sweep::new(LowerLeft, Descending),
        Sweep::new(LowerRight, Ascending),
    ],
    Pace::Medium,
)];

const INSIDE_OUT: [Phase; 1] = [(
    &[
        Sweep::new(UpperRight, Ascending),
        Sweep::new(UpperLeft, Ascending),
        Sweep::new(LowerLeft, Ascending),
        Sweep::new(LowerRight, Descending),
    ],
    Pace::Medium,
)];

impl<P: StarPorts, D: BlockingDelay> Player<P, D> {
    /// Fill the top pair, then the bottom pair
    pub fn trace_top_to_bottom(&mut self, count: u32) {
        self.mirrored_trace(&TOP_TO_BOTTOM, count);
    }

    /// Fill the bottom pair, then the top pair
    pub fn trace_bottom_to_top(&mut self, count: u32) {
        self.mirrored_trace(&BOTTOM_TO_TOP, count);
    }

    /// Fill all four quadrants at once, converging from top and bottom
    pub fn trace_top_and_bottom(&mut self, count: u32) {
        self.mirrored_trace(&OUTSIDE_IN, count);
    }

    /// Fill all four quadrants at once, diverging from the middle
    pub fn trace_middle_to_top_bottom(&mut self, count: u32) {
        self.mirrored_trace(&INSIDE_OUT, count);
    }

    /// Fill the left pair, then the right pair
    pub fn trace_left_to_right(&mut self, count: u32) {
        self.mirrored_trace(&LEFT_TO_RIGHT, count);
    }

    /// Fill the right pair, then the left pair
    pub fn trace_right_to_left(&mut self, count: u32) {
        self.mirrored_trace(&RIGHT_TO_LEFT, count);
    }

    /// Fill all four quadrants at once, converging from left and right
    pub fn trace_left_and_right(&mut self, count: u32) {
        self.mirrored_trace(&OUTSIDE_IN, count);
    }

    /// Fill all four quadrants at once, diverging toward left and right
    pub fn trace_middle_to_left_right(&mut self, count: u32) {
        self.mirrored_trace(&INSIDE_OUT, count);
    }

    fn mirrored_trace(&mut self, phases: &[Phase], count: u32) {
        let timings = *self.timings();
        self.all_off();
        for _ in 0..count {
            for &(sweeps, pace) in phases {
                self.sweep(sweeps, Fill::Accumulate, pace.step(&timings));
            }
            self.all_off();
            self.wait(timings.settle);
        }
    }
}
