//! Top-level driver
//!
//! Plays the playlist forever. The only interaction with the surrounding
//! hardware is the watchdog, which is fed once per lap.

use crate::config::{Playlist, ShowConfig};
use crate::delay::BlockingDelay;
use crate::logging::debug;
use crate::pattern::PatternId;
use crate::player::Player;
use crate::port::StarPorts;

/// Hardware watchdog that resets the processor unless fed
pub trait Watchdog {
    /// Acknowledge the watchdog
    fn feed(&mut self);
}

impl<T: Watchdog + ?Sized> Watchdog for &mut T {
    fn feed(&mut self) {
        (**self).feed();
    }
}

/// Endless pattern show
pub struct Show<P: StarPorts, D: BlockingDelay, W: Watchdog> {
    player: Player<P, D>,
    watchdog: W,
    playlist: Playlist,
    repeat_count: u32,
    laps: u32,
}

impl<P: StarPorts, D: BlockingDelay, W: Watchdog> Show<P, D, W> {
    pub fn new(ports: P, delay: D, watchdog: W, config: &ShowConfig) -> Self {
        Self {
            player: Player::new(ports, delay, config.timings),
            watchdog,
            playlist: config.playlist.clone(),
            repeat_count: config.repeat_count,
            laps: 0,
        }
    }

    pub const fn player(&self) -> &Player<P, D> {
        &self.player
    }

    pub fn playlist(&self) -> &[PatternId] {
        &self.playlist
    }

    /// Number of completed laps (wraps)
    pub const fn laps(&self) -> u32 {
        self.laps
    }

    /// Power-up sequence
    pub fn setup(&mut self) {
        self.player.setup();
    }

    /// Play every pattern once, then feed the watchdog
    pub fn lap(&mut self) {
        for &pattern in &self.playlist {
            self.player.play(pattern, self.repeat_count);
        }
        self.watchdog.feed();
        self.laps = self.laps.wrapping_add(1);
        debug!("bling-star: watchdog fed after lap {}", self.laps);
    }

    /// Set up and play laps until power loss or reset
    pub fn run(mut self) -> ! {
        self.setup();
        loop {
            self.lap();
        }
    }
}
