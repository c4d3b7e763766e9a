#![no_std]

pub mod config;
pub mod delay;
pub mod hw;
mod logging;
pub mod pattern;
pub mod player;
pub mod port;
pub mod show;

pub use config::{DEFAULT_REPEAT_COUNT, Playlist, ShowConfig, StepTimings};
pub use delay::{BlockingDelay, BusyWait, EmbassyDelay};
pub use hw::{MmioPorts, WatchdogControl};
pub use pattern::{PATTERN_COUNT, PatternId};
pub use player::{Fill, Player, ScanOrder, Sweep};
pub use port::{PortLatch, Quadrant, SEG_OFF, SEG_ON, StarPorts};
pub use show::{Show, Watchdog};

pub use embassy_time::Duration;
