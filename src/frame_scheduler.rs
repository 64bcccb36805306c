//! Host frame loop
//!
//! Drives one frame per call: drains queued commands, advances the engine,
//! queries every pixel in ascending order and hands the frame to the output
//! driver. Sleeping stays with the caller.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};
use crate::command::CommandReceiver;
use crate::engine::ShowEngine;
use crate::error::{ConfigError, Param};

/// Safe ceiling for the inter-frame delay
pub const MAX_FRAME_DELAY: Duration = Duration::from_millis(20);

/// Frame delay used by [`FrameScheduler::new`]
pub const DEFAULT_FRAME_DELAY: Duration = MAX_FRAME_DELAY;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::<_, 170, 8>::new(engine, output, 70);
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()));
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const MAX_PIXELS: usize, const QUEUE: usize> {
    output: O,
    engine: ShowEngine,
    commands: Option<CommandReceiver<'a, QUEUE>>,
    frame: [Rgb; MAX_PIXELS],
    pixel_count: usize,
    frame_delay: Duration,
    next_frame: Option<Instant>,
}

impl<'a, O: OutputDriver, const MAX_PIXELS: usize, const QUEUE: usize>
    FrameScheduler<'a, O, MAX_PIXELS, QUEUE>
{
    /// Create a scheduler for `pixel_count` pixels with the default delay
    pub fn new(engine: ShowEngine, output: O, pixel_count: u16) -> Self {
        let mut scheduler = Self {
            output,
            engine,
            commands: None,
            frame: [BLACK; MAX_PIXELS],
            pixel_count: MAX_PIXELS.min(1),
            frame_delay: DEFAULT_FRAME_DELAY,
            next_frame: None,
        };
        scheduler.set_pixel_count(pixel_count);
        scheduler
    }

    /// Attach a command receiver drained at every frame boundary
    #[must_use]
    pub fn with_commands(mut self, commands: CommandReceiver<'a, QUEUE>) -> Self {
        self.commands = Some(commands);
        self
    }

    /// Set the number of addressed pixels, clamped to `1..=MAX_PIXELS`
    pub fn set_pixel_count(&mut self, count: u16) {
        let clamped = usize::from(count).clamp(MAX_PIXELS.min(1), MAX_PIXELS);
        let result = if clamped == usize::from(count) {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                param: Param::PixelCount,
                value: f32::from(count),
            })
        };
        self.engine.handle(result);
        self.pixel_count = clamped;
    }

    /// Set the inter-frame delay, clamped to [`MAX_FRAME_DELAY`]
    ///
    /// Zero runs frames back to back.
    #[allow(clippy::cast_precision_loss)]
    pub fn set_frame_delay(&mut self, delay: Duration) {
        let result = if delay > MAX_FRAME_DELAY {
            Err(ConfigError::OutOfRange {
                param: Param::FrameDelay,
                value: delay.as_millis() as f32,
            })
        } else {
            Ok(())
        };
        self.engine.handle(result);
        self.frame_delay = delay.min(MAX_FRAME_DELAY);
    }

    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    pub const fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        if let Some(commands) = &self.commands {
            commands.apply_pending(&mut self.engine);
        }
        self.engine.run(now);

        let frame = &mut self.frame[..self.pixel_count];
        self.engine.render(frame);
        self.output.write(frame);

        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift = Duration::from_ticks(self.frame_delay.as_ticks() * 2);
        let base = match self.next_frame {
            Some(deadline) if now <= deadline + max_drift => deadline,
            _ => now,
        };
        let next_frame = base + self.frame_delay;
        self.next_frame = Some(next_frame);

        FrameResult {
            next_deadline: next_frame,
            sleep_duration: next_frame
                .checked_duration_since(now)
                .unwrap_or(Duration::from_ticks(0)),
        }
    }

    pub const fn engine(&self) -> &ShowEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ShowEngine {
        &mut self.engine
    }

    pub const fn output(&self) -> &O {
        &self.output
    }
}
