//! Recording harness shared by the integration tests
//!
//! Ports, delay and watchdog append to one event log so tests can replay
//! exactly what the star showed at every delay step.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use bling_star::{
    BlockingDelay, Duration, PortLatch, Quadrant, ShowConfig, StarPorts, StepTimings, Watchdog,
    Player, Show,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Write(Quadrant, u8),
    Delay(u64),
    Feed,
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub struct RecordingPorts {
    latch: PortLatch,
    log: Log,
}

impl StarPorts for RecordingPorts {
    fn write(&mut self, quadrant: Quadrant, value: u8) {
        self.latch.write(quadrant, value);
        self.log.borrow_mut().push(Event::Write(quadrant, value));
    }

    fn read(&self, quadrant: Quadrant) -> u8 {
        self.latch.read(quadrant)
    }
}

impl RecordingPorts {
    pub fn latch(&self) -> PortLatch {
        self.latch
    }
}

pub struct RecordingDelay {
    log: Log,
}

impl BlockingDelay for RecordingDelay {
    fn delay(&mut self, duration: Duration) {
        self.log.borrow_mut().push(Event::Delay(duration.as_millis()));
    }
}

pub struct RecordingWatchdog {
    log: Log,
}

impl Watchdog for RecordingWatchdog {
    fn feed(&mut self) {
        self.log.borrow_mut().push(Event::Feed);
    }
}

pub type TestPlayer = Player<RecordingPorts, RecordingDelay>;
pub type TestShow = Show<RecordingPorts, RecordingDelay, RecordingWatchdog>;

fn parts() -> (RecordingPorts, RecordingDelay, RecordingWatchdog, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    (
        RecordingPorts {
            latch: PortLatch::new(),
            log: log.clone(),
        },
        RecordingDelay { log: log.clone() },
        RecordingWatchdog { log: log.clone() },
        log,
    )
}

/// Player with default timings and a fresh log
pub fn player() -> (TestPlayer, Log) {
    let (ports, delay, _, log) = parts();
    (Player::new(ports, delay, StepTimings::default()), log)
}

pub fn show(config: &ShowConfig) -> (TestShow, Log) {
    let (ports, delay, watchdog, log) = parts();
    (Show::new(ports, delay, watchdog, config), log)
}

pub fn events(log: &Log) -> Vec<Event> {
    log.borrow().clone()
}

/// What the star showed during one delay step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub latch: PortLatch,
    pub ms: u64,
    /// Quadrants written since the previous delay, in first-write order
    pub written: Vec<Quadrant>,
}

/// Replay the log and capture the port state at every delay
pub fn steps(events: &[Event]) -> Vec<Step> {
    let mut latch = PortLatch::new();
    let mut written = Vec::new();
    let mut steps = Vec::new();
    for event in events {
        match *event {
            Event::Write(quadrant, value) => {
                latch.write(quadrant, value);
                if !written.contains(&quadrant) {
                    written.push(quadrant);
                }
            }
            Event::Delay(ms) => {
                steps.push(Step {
                    latch,
                    ms,
                    written: std::mem::take(&mut written),
                });
            }
            Event::Feed => {}
        }
    }
    steps
}

/// Port state after replaying the whole log
pub fn final_latch(events: &[Event]) -> PortLatch {
    let mut latch = PortLatch::new();
    for event in events {
        if let Event::Write(quadrant, value) = *event {
            latch.write(quadrant, value);
        }
    }
    latch
}

/// Every lit LED as (quadrant, bit), in port and bit order
pub fn lit(latch: &PortLatch) -> Vec<(Quadrant, u8)> {
    Quadrant::ALL
        .iter()
        .flat_map(|&quadrant| (0..8).map(move |bit| (quadrant, bit)))
        .filter(|&(quadrant, bit)| latch.is_lit(quadrant, bit))
        .collect()
}

/// Quadrants that are fully lit
pub fn lit_quadrants(latch: &PortLatch) -> Vec<Quadrant> {
    Quadrant::ALL
        .iter()
        .copied()
        .filter(|&quadrant| latch.value(quadrant) == bling_star::SEG_ON)
        .collect()
}

/// LEDs lit in `next` but not in `prev`
pub fn newly_lit(prev: &PortLatch, next: &PortLatch) -> Vec<(Quadrant, u8)> {
    lit(next)
        .into_iter()
        .filter(|&(quadrant, bit)| !prev.is_lit(quadrant, bit))
        .collect()
}

pub fn total_ms(events: &[Event]) -> u64 {
    events
        .iter()
        .map(|event| match *event {
            Event::Delay(ms) => ms,
            _ => 0,
        })
        .sum()
}
