//! Pattern routines with compile-time known ids
//!
//! Each routine is a method on [`Player`] taking a repeat count. Routines are
//! grouped by shape: whole-quadrant flashes, rotating scans and mirrored
//! two-sided traces.

mod mirrored;
mod quadrant;
mod rotation;

use crate::delay::BlockingDelay;
use crate::player::Player;
use crate::port::StarPorts;

/// Number of known patterns
pub const PATTERN_COUNT: usize = 15;

const PATTERN_NAME_SOLID_FLASH: &str = "solid_flash";
const PATTERN_NAME_QUADRANT_CHASE: &str = "quadrant_chase";
const PATTERN_NAME_QUADRANT_DANCE: &str = "quadrant_dance";
const PATTERN_NAME_CHASE_CW: &str = "chase_cw";
const PATTERN_NAME_CHASE_CCW: &str = "chase_ccw";
const PATTERN_NAME_TRACE_CW: &str = "trace_cw";
const PATTERN_NAME_TRACE_CCW: &str = "trace_ccw";
const PATTERN_NAME_TOP_TO_BOTTOM: &str = "trace_top_to_bottom";
const PATTERN_NAME_BOTTOM_TO_TOP: &str = "trace_bottom_to_top";
const PATTERN_NAME_TOP_AND_BOTTOM: &str = "trace_top_and_bottom";
const PATTERN_NAME_MIDDLE_TO_TOP_BOTTOM: &str = "trace_middle_to_top_bottom";
const PATTERN_NAME_LEFT_TO_RIGHT: &str = "trace_left_to_right";
const PATTERN_NAME_RIGHT_TO_LEFT: &str = "trace_right_to_left";
const PATTERN_NAME_LEFT_AND_RIGHT: &str = "trace_left_and_right";
const PATTERN_NAME_MIDDLE_TO_LEFT_RIGHT: &str = "trace_middle_to_left_right";

const PATTERN_ID_SOLID_FLASH: u8 = 0;
const PATTERN_ID_QUADRANT_CHASE: u8 = 1;
const PATTERN_ID_QUADRANT_DANCE: u8 = 2;
const PATTERN_ID_CHASE_CW: u8 = 3;
const PATTERN_ID_CHASE_CCW: u8 = 4;
const PATTERN_ID_TRACE_CW: u8 = 5;
const PATTERN_ID_TRACE_CCW: u8 = 6;
const PATTERN_ID_TOP_TO_BOTTOM: u8 = 7;
const PATTERN_ID_BOTTOM_TO_TOP: u8 = 8;
const PATTERN_ID_TOP_AND_BOTTOM: u8 = 9;
const PATTERN_ID_MIDDLE_TO_TOP_BOTTOM: u8 = 10;
const PATTERN_ID_LEFT_TO_RIGHT: u8 = 11;
const PATTERN_ID_RIGHT_TO_LEFT: u8 = 12;
const PATTERN_ID_LEFT_AND_RIGHT: u8 = 13;
const PATTERN_ID_MIDDLE_TO_LEFT_RIGHT: u8 = 14;

/// Known pattern ids
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PatternId {
    SolidFlash = PATTERN_ID_SOLID_FLASH,
    QuadrantChase = PATTERN_ID_QUADRANT_CHASE,
    QuadrantDance = PATTERN_ID_QUADRANT_DANCE,
    ChaseCw = PATTERN_ID_CHASE_CW,
    ChaseCcw = PATTERN_ID_CHASE_CCW,
    TraceCw = PATTERN_ID_TRACE_CW,
    TraceCcw = PATTERN_ID_TRACE_CCW,
    TraceTopToBottom = PATTERN_ID_TOP_TO_BOTTOM,
    TraceBottomToTop = PATTERN_ID_BOTTOM_TO_TOP,
    TraceTopAndBottom = PATTERN_ID_TOP_AND_BOTTOM,
    TraceMiddleToTopBottom = PATTERN_ID_MIDDLE_TO_TOP_BOTTOM,
    TraceLeftToRight = PATTERN_ID_LEFT_TO_RIGHT,
    TraceRightToLeft = PATTERN_ID_RIGHT_TO_LEFT,
    TraceLeftAndRight = PATTERN_ID_LEFT_AND_RIGHT,
    TraceMiddleToLeftRight = PATTERN_ID_MIDDLE_TO_LEFT_RIGHT,
}

impl PatternId {
    /// Lap order of the show
    pub const SEQUENCE: [Self; PATTERN_COUNT] = [
        Self::SolidFlash,
        Self::QuadrantChase,
        Self::QuadrantDance,
        Self::ChaseCw,
        Self::ChaseCcw,
        Self::TraceCw,
        Self::TraceCcw,
        Self::TraceTopToBottom,
        Self::TraceBottomToTop,
        Self::TraceTopAndBottom,
        Self::TraceMiddleToTopBottom,
        Self::TraceLeftToRight,
        Self::TraceRightToLeft,
        Self::TraceLeftAndRight,
        Self::TraceMiddleToLeftRight,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_SOLID_FLASH => Self::SolidFlash,
            PATTERN_ID_QUADRANT_CHASE => Self::QuadrantChase,
            PATTERN_ID_QUADRANT_DANCE => Self::QuadrantDance,
            PATTERN_ID_CHASE_CW => Self::ChaseCw,
            PATTERN_ID_CHASE_CCW => Self::ChaseCcw,
            PATTERN_ID_TRACE_CW => Self::TraceCw,
            PATTERN_ID_TRACE_CCW => Self::TraceCcw,
            PATTERN_ID_TOP_TO_BOTTOM => Self::TraceTopToBottom,
            PATTERN_ID_BOTTOM_TO_TOP => Self::TraceBottomToTop,
            PATTERN_ID_TOP_AND_BOTTOM => Self::TraceTopAndBottom,
            PATTERN_ID_MIDDLE_TO_TOP_BOTTOM => Self::TraceMiddleToTopBottom,
            PATTERN_ID_LEFT_TO_RIGHT => Self::TraceLeftToRight,
            PATTERN_ID_RIGHT_TO_LEFT => Self::TraceRightToLeft,
            PATTERN_ID_LEFT_AND_RIGHT => Self::TraceLeftAndRight,
            PATTERN_ID_MIDDLE_TO_LEFT_RIGHT => Self::TraceMiddleToLeftRight,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SolidFlash => PATTERN_NAME_SOLID_FLASH,
            Self::QuadrantChase => PATTERN_NAME_QUADRANT_CHASE,
            Self::QuadrantDance => PATTERN_NAME_QUADRANT_DANCE,
            Self::ChaseCw => PATTERN_NAME_CHASE_CW,
            Self::ChaseCcw => PATTERN_NAME_CHASE_CCW,
            Self::TraceCw => PATTERN_NAME_TRACE_CW,
            Self::TraceCcw => PATTERN_NAME_TRACE_CCW,
            Self::TraceTopToBottom => PATTERN_NAME_TOP_TO_BOTTOM,
            Self::TraceBottomToTop => PATTERN_NAME_BOTTOM_TO_TOP,
            Self::TraceTopAndBottom => PATTERN_NAME_TOP_AND_BOTTOM,
            Self::TraceMiddleToTopBottom => PATTERN_NAME_MIDDLE_TO_TOP_BOTTOM,
            Self::TraceLeftToRight => PATTERN_NAME_LEFT_TO_RIGHT,
            Self::TraceRightToLeft => PATTERN_NAME_RIGHT_TO_LEFT,
            Self::TraceLeftAndRight => PATTERN_NAME_LEFT_AND_RIGHT,
            Self::TraceMiddleToLeftRight => PATTERN_NAME_MIDDLE_TO_LEFT_RIGHT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::SEQUENCE
            .iter()
            .copied()
            .find(|pattern| pattern.as_str() == s)
    }

    /// Run the routine behind this id `count` times
    pub fn play<P: StarPorts, D: BlockingDelay>(self, player: &mut Player<P, D>, count: u32) {
        match self {
            Self::SolidFlash => player.solid_flash(count),
            Self::QuadrantChase => player.quadrant_chase(count),
            Self::QuadrantDance => player.quadrant_dance(count),
            Self::ChaseCw => player.chase_cw(count),
            Self::ChaseCcw => player.chase_ccw(count),
            Self::TraceCw => player.trace_cw(count),
            Self::TraceCcw => player.trace_ccw(count),
            Self::TraceTopToBottom => player.trace_top_to_bottom(count),
            Self::TraceBottomToTop => player.trace_bottom_to_top(count),
            Self::TraceTopAndBottom => player.trace_top_and_bottom(count),
            Self::TraceMiddleToTopBottom => player.trace_middle_to_top_bottom(count),
            Self::TraceLeftToRight => player.trace_left_to_right(count),
            Self::TraceRightToLeft => player.trace_right_to_left(count),
            Self::TraceLeftAndRight => player.trace_left_and_right(count),
            Self::TraceMiddleToLeftRight => player.trace_middle_to_left_right(count),
        }
    }
}
