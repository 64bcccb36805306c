//! Show engine
//!
//! Owns the show configuration, the phase state and the diagnostics latch.
//! The host configures it, calls [`ShowEngine::run`] once per frame and then
//! queries every pixel with [`ShowEngine::fixture_color`].

use embassy_time::{Duration, Instant, TICK_HZ};

use crate::color::{BLACK, Rgb, blend_colors, dim};
use crate::config::EngineConfig;
use crate::diagnostics::Diagnostics;
use crate::error::{ConfigError, EngineError, Error};
use crate::math8::unit8;
use crate::show::{
    Blend, Direction, RandomLayout, ShowType, SplitMix64, StepPosition, TransitionType, wrap,
};

/// Phase accumulator units per beat (timer ticks per minute)
const PHASE_UNITS_PER_BEAT: u64 = 60 * TICK_HZ;

/// Seed used by [`ShowEngine::new`]
pub const DEFAULT_SEED: u64 = 0x5eed_d3c0_2c7a_11e5;

/// Internal engine state, advanced only by the engine itself
#[derive(Debug, Clone)]
pub struct EngineState {
    /// Elapsed `ticks * bpm`, wrapped to one full cycle
    phase_units: u64,
    last_run: Option<Instant>,
    rng: SplitMix64,
    random: Option<RandomLayout>,
}

impl EngineState {
    pub const fn new(seed: u64) -> Self {
        Self {
            phase_units: 0,
            last_run: None,
            rng: SplitMix64::new(seed),
            random: None,
        }
    }

    /// Current phase in beats, in `[0, color count)`
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn phase(&self) -> f32 {
        (self.phase_units as f64 / PHASE_UNITS_PER_BEAT as f64) as f32
    }

    /// Layout for the `Random` direction, resolved on the first advance of a show
    pub const fn random_layout(&self) -> Option<&RandomLayout> {
        self.random.as_ref()
    }

    /// Start a new show: zero phase, unresolved random layout
    fn restart(&mut self) {
        self.phase_units = 0;
        self.random = None;
    }
}

/// Effect engine for one show
#[derive(Debug)]
pub struct ShowEngine {
    config: EngineConfig,
    state: EngineState,
    diagnostics: Diagnostics,
}

impl Default for ShowEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default(), DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(EngineConfig::default(), seed)
    }

    pub fn with_config(config: EngineConfig, seed: u64) -> Self {
        Self {
            config,
            state: EngineState::new(seed),
            diagnostics: Diagnostics::new(),
        }
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub const fn state(&self) -> &EngineState {
        &self.state
    }

    /// Current phase in beats
    pub fn phase(&self) -> f32 {
        self.state.phase()
    }

    /// Take the most recently reported error
    pub fn take_error(&self) -> Option<Error> {
        self.diagnostics.take_last()
    }

    /// Report the outcome of one setter call
    ///
    /// Every setter call re-arms the range latch, so each clamped value is
    /// logged once.
    pub(crate) fn handle(&self, result: Result<(), ConfigError>) {
        self.diagnostics.rearm_out_of_range();
        if let Err(err) = result {
            self.diagnostics.report(err);
        }
    }

    pub fn set_show_type(&mut self, show_type: ShowType) {
        if self.config.show_type() != show_type {
            self.config.set_show_type(show_type);
            self.restart();
        }
    }

    pub fn set_speed(&mut self, bpm: u16) {
        let result = self.config.set_speed(bpm);
        self.handle(result);
    }

    pub fn set_size(&mut self, size: u16) {
        let result = self.config.set_size(size);
        self.handle(result);
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if self.config.direction() != direction {
            self.config.set_direction(direction);
            self.restart();
        }
    }

    pub fn set_splits(&mut self, splits: u16) {
        let result = self.config.set_splits(splits);
        self.handle(result);
    }

    pub fn set_transition(&mut self, transition: TransitionType) {
        self.config.set_transition(transition);
    }

    pub fn set_transition_width(&mut self, width: f32) {
        let result = self.config.set_transition_width(width);
        self.handle(result);
    }

    /// Store a color at a 1-based step number
    pub fn set_color_step(&mut self, step: u8, r: u8, g: u8, b: u8) {
        let result = self.config.set_color_step(step, Rgb { r, g, b });
        self.handle(result);
        self.diagnostics.rearm_color_count();
    }

    pub fn set_color_count(&mut self, count: u8) {
        let result = self.config.set_color_count(count);
        self.handle(result);
        self.diagnostics.rearm_color_count();
    }

    /// Start the show over from phase zero
    ///
    /// The random layout is re-resolved on the next advance.
    pub fn restart(&mut self) {
        self.state.restart();
    }

    /// Advance the phase to `now`
    ///
    /// The first call only latches the time. Call once per frame.
    pub fn run(&mut self, now: Instant) {
        let elapsed = self
            .state
            .last_run
            .and_then(|last| now.checked_duration_since(last))
            .unwrap_or(Duration::from_ticks(0));
        self.state.last_run = Some(now);
        self.advance(elapsed);
    }

    /// Advance the phase by `elapsed` without a clock
    ///
    /// The full timer resolution is kept, so frames shorter than a
    /// millisecond still move the phase.
    pub fn advance(&mut self, elapsed: Duration) {
        if let Some(mismatch) = self.config.color_count_mismatch() {
            self.diagnostics.report(mismatch);
        }
        if self.config.direction() == Direction::Random && self.state.random.is_none() {
            self.state.random = Some(RandomLayout::shuffled(&mut self.state.rng));
        }

        let steps = self.config.active_steps().len().max(1) as u64;
        let cycle = PHASE_UNITS_PER_BEAT * steps;
        let delta = (elapsed.as_ticks() % cycle) * u64::from(self.config.speed_bpm());
        self.state.phase_units = (self.state.phase_units % cycle + delta % cycle) % cycle;
    }

    /// Color of a 1-based pixel, black for an invalid query
    pub fn fixture_color(&self, pixel_index: u16, total_pixels: u16) -> Rgb {
        self.try_fixture_color(pixel_index, total_pixels)
            .unwrap_or_else(|err| {
                self.diagnostics.report(err);
                BLACK
            })
    }

    /// Color of a 1-based pixel
    pub fn try_fixture_color(
        &self,
        pixel_index: u16,
        total_pixels: u16,
    ) -> Result<Rgb, EngineError> {
        if total_pixels == 0 || pixel_index == 0 || pixel_index > total_pixels {
            return Err(EngineError::InvalidPixelQuery {
                index: pixel_index,
                total: total_pixels,
            });
        }
        Ok(pixel_color(
            &self.config,
            &self.state,
            pixel_index,
            total_pixels,
        ))
    }

    /// Fill a frame in ascending pixel order
    ///
    /// The frame length is the total pixel count.
    pub fn render(&self, frame: &mut [Rgb]) {
        let total = u16::try_from(frame.len()).unwrap_or(u16::MAX);
        for (index, pixel) in (1..=total).zip(frame.iter_mut()) {
            *pixel = self.fixture_color(index, total);
        }
    }
}

/// Compute the color of one pixel
///
/// Pure function of its arguments. `pixel_index` must be in
/// `1..=total_pixels`; anything else is treated as the first pixel.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn pixel_color(
    config: &EngineConfig,
    state: &EngineState,
    pixel_index: u16,
    total_pixels: u16,
) -> Rgb {
    let steps = config.active_steps();
    if steps.is_empty() || total_pixels == 0 {
        return BLACK;
    }

    // Fold into splits with integer math so every segment repeats exactly
    let total = u32::from(total_pixels);
    let splits = u32::from(config.splits());
    let pixel_offset = u32::from(pixel_index.clamp(1, total_pixels)) - 1;
    let residue = (pixel_offset * splits) % total;

    // Offset inside the segment in pixel units, `residue / total * segment_len`
    let segment_len = total as f32 / splits as f32;
    let offset = residue as f32 / splits as f32;
    let distance = config
        .direction()
        .remap(offset, segment_len, state.random_layout());
    let blocks = distance / f32::from(config.size());

    let StepPosition { index, level } = config.show_type().step_position(blocks, state.phase());

    let count = steps.len();
    let index = wrap(index, count as f32);
    let step = (libm::floorf(index) as usize).min(count - 1);
    let t = (index - step as f32).clamp(0.0, 1.0);

    let current = steps[step];
    let color = match config.transition().shape(config.transition_width(), t) {
        Blend::Pure => current,
        Blend::Previous(amount) => {
            blend_colors(current, steps[(step + count - 1) % count], unit8(amount))
        }
        Blend::Next(amount) => blend_colors(current, steps[(step + 1) % count], unit8(amount)),
    };

    dim(color, level)
}
