#![no_std]

pub mod color;
pub mod command;
pub mod config;
pub mod diagnostics;
pub mod dmx;
pub mod engine;
pub mod error;
pub mod frame_scheduler;
pub mod math8;
pub mod show;

pub use command::{CommandChannel, CommandReceiver, CommandSender, ShowCommand};
pub use config::{EngineConfig, MAX_COLOR_STEPS};
pub use dmx::{DmxOutput, DmxUniverse, DmxWriter};
pub use engine::{EngineState, ShowEngine, pixel_color};
pub use error::{ConfigError, EngineError, Error};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use show::{Direction, ShowType, TransitionType};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract pixel output trait
///
/// Implement this trait to support different transports.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write a frame, first pixel first
    fn write(&mut self, pixels: &[Rgb]);
}
