//! Engine error taxonomy
//!
//! None of these errors ever leave the engine as a failure: setters clamp or
//! ignore, queries substitute black. They exist so the condition can be
//! logged and polled by the host.

use core::fmt;

use thiserror::Error;

/// Configuration parameter identifier used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Speed,
    Size,
    Splits,
    TransitionWidth,
    ColorStep,
    ColorCount,
    PixelCount,
    FrameDelay,
}

impl Param {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Size => "size",
            Self::Splits => "splits",
            Self::TransitionWidth => "transition_width",
            Self::ColorStep => "color_step",
            Self::ColorCount => "color_count",
            Self::PixelCount => "pixel_count",
            Self::FrameDelay => "frame_delay",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Problems with a configuration call
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Argument was outside its domain and has been clamped
    #[error("{param} out of range ({value}), clamped")]
    OutOfRange { param: Param, value: f32 },
    /// Color count disagrees with the stored step count, the minimum is used
    #[error("color count {count} does not match {stored} stored steps, using the smaller")]
    ColorCountMismatch { count: u8, stored: u8 },
    /// Step number beyond the fixed step capacity, the call was ignored
    #[error("color step {step} exceeds capacity, ignored")]
    TooManySteps { step: u8 },
}

/// Problems with a color query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Pixel index outside `1..=total` or an empty strip
    #[error("invalid pixel query {index} of {total}")]
    InvalidPixelQuery { index: u16, total: u16 },
}

/// Any error reported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}
