//! Whole-quadrant patterns
//!
//! Every step switches entire ports at once and holds for the slow step.

use crate::delay::BlockingDelay;
use crate::player::Player;
use crate::port::{Quadrant, StarPorts};

const CHASE_ORDER: [Quadrant; 4] = [
    Quadrant::UpperLeft,
    Quadrant::LowerLeft,
    Quadrant::UpperRight,
    Quadrant::LowerRight,
];

impl<P: StarPorts, D: BlockingDelay> Player<P, D> {
    /// Flash the whole star on and off
    pub fn solid_flash(&mut self, count: u32) {
        let step = self.timings().slow;
        self.all_off();
        for _ in 0..count {
            self.all_on();
            self.wait(step);
            self.all_off();
            self.wait(step);
        }
    }

    /// Light the quadrants one after another, then darken them in the same order
    pub fn quadrant_chase(&mut self, count: u32) {
        let step = self.timings().slow;
        self.all_off();
        for _ in 0..count {
            for quadrant in CHASE_ORDER {
                self.light(quadrant);
                self.wait(step);
            }
            for quadrant in CHASE_ORDER {
                self.darken(quadrant);
                self.wait(step);
            }
        }
    }

    /// Alternate the two diagonals, inverting the star between them
    ///
    /// Each iteration starts by clearing the star, so a zero count leaves the
    /// ports untouched. Ends with the upper-left and lower-right diagonal lit.
    pub fn quadrant_dance(&mut self, count: u32) {
        let step = self.timings().slow;
        for _ in 0..count {
            self.all_off();
            self.wait(step);

            self.light(Quadrant::UpperLeft);
            self.light(Quadrant::LowerRight);
            self.wait(step);
            self.all_toggle();
            self.wait(step);

            self.all_off();
            self.wait(step);

            self.light(Quadrant::LowerLeft);
            self.light(Quadrant::UpperRight);
            self.wait(step);
            self.all_toggle();
            self.wait(step);
        }
    }
}
