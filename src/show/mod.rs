//! Show vocabulary with compile-time known variants
//!
//! Show type, direction and transition shape are closed enums so the frame
//! computation matches on them exhaustively. Each one parses from the
//! design tool's names and from raw numeric codes.

mod direction;
mod random;
mod transition;

use core::f32::consts::TAU;

pub use direction::Direction;
pub use random::{RANDOM_BINS, RandomLayout, SplitMix64};
pub use transition::{Blend, TransitionType};

use crate::math8::unit8;

const SHOW_NAME_STATIC: &str = "static";
const SHOW_NAME_ALL: &str = "all";
const SHOW_NAME_CHASE: &str = "chase";
const SHOW_NAME_PULSE: &str = "pulse";

const SHOW_ID_STATIC: u8 = 0;
const SHOW_ID_ALL: u8 = 1;
const SHOW_ID_CHASE: u8 = 2;
const SHOW_ID_PULSE: u8 = 3;

/// Top-level animation pattern
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ShowType {
    /// Color is a function of position only
    #[default]
    Static = SHOW_ID_STATIC,
    /// Whole range shows one color step at a time
    All = SHOW_ID_ALL,
    /// Color blocks travel along the strip
    Chase = SHOW_ID_CHASE,
    /// Static pattern with a brightness envelope over time
    Pulse = SHOW_ID_PULSE,
}

/// Where a pixel lands on the color step sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPosition {
    /// Continuous color index, the integer part selects the step
    pub index: f32,
    /// Brightness applied after blending (255 = unchanged)
    pub level: u8,
}

impl ShowType {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            SHOW_ID_STATIC => Self::Static,
            SHOW_ID_ALL => Self::All,
            SHOW_ID_CHASE => Self::Chase,
            SHOW_ID_PULSE => Self::Pulse,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => SHOW_NAME_STATIC,
            Self::All => SHOW_NAME_ALL,
            Self::Chase => SHOW_NAME_CHASE,
            Self::Pulse => SHOW_NAME_PULSE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        [Self::Static, Self::All, Self::Chase, Self::Pulse]
            .into_iter()
            .find(|show| show.as_str().eq_ignore_ascii_case(s))
    }

    /// Combine a pixel position with the phase
    ///
    /// `blocks` is the pixel's distance from its segment origin measured in
    /// color blocks, `phase` is in beats.
    pub fn step_position(self, blocks: f32, phase: f32) -> StepPosition {
        match self {
            Self::Static => StepPosition {
                index: blocks,
                level: 255,
            },
            Self::All => StepPosition {
                index: phase,
                level: 255,
            },
            Self::Chase => StepPosition {
                index: blocks - phase,
                level: 255,
            },
            Self::Pulse => StepPosition {
                index: blocks,
                level: pulse_level(phase),
            },
        }
    }
}

/// Sinusoidal envelope, one pulse per beat, full brightness on the beat
fn pulse_level(phase: f32) -> u8 {
    let beat = wrap(phase, 1.0);
    unit8(0.5 + 0.5 * libm::cosf(TAU * beat))
}

/// Wrap `value` into `[0, modulus)`
pub(crate) fn wrap(value: f32, modulus: f32) -> f32 {
    if !value.is_finite() || modulus <= 0.0 {
        return 0.0;
    }
    let wrapped = value - modulus * libm::floorf(value / modulus);
    if wrapped >= modulus || wrapped < 0.0 {
        0.0
    } else {
        wrapped
    }
}
