use embassy_time::Duration;
use heapless::Vec;

use crate::pattern::{PATTERN_COUNT, PatternId};

/// Number of times each pattern repeats per lap
pub const DEFAULT_REPEAT_COUNT: u32 = 3;

const FAST_STEP_MS: u64 = 50;
const MEDIUM_STEP_MS: u64 = 100;
const SLOW_STEP_MS: u64 = 250;
const SETTLE_MS: u64 = 50;

/// Ordered list of patterns played in one lap
pub type Playlist = Vec<PatternId, PATTERN_COUNT>;

/// Step durations used by the patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTimings {
    /// Single-bit scan step
    pub fast: Duration,
    /// Four-quadrant mirrored scan step
    pub medium: Duration,
    /// Whole-quadrant flash and chase step
    pub slow: Duration,
    /// Pause after a trace clears, and after power-up
    pub settle: Duration,
}

impl Default for StepTimings {
    fn default() -> Self {
        Self {
            fast: Duration::from_millis(FAST_STEP_MS),
            medium: Duration::from_millis(MEDIUM_STEP_MS),
            slow: Duration::from_millis(SLOW_STEP_MS),
            settle: Duration::from_millis(SETTLE_MS),
        }
    }
}

/// Configuration for the show
#[derive(Debug, Clone)]
pub struct ShowConfig {
    pub timings: StepTimings,
    pub repeat_count: u32,
    pub playlist: Playlist,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            timings: StepTimings::default(),
            repeat_count: DEFAULT_REPEAT_COUNT,
            playlist: PatternId::SEQUENCE.iter().copied().collect(),
        }
    }
}
