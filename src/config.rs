//! Live show configuration
//!
//! Every setter clamps its argument into the documented domain and stores
//! it. An `Err` return reports an argument that was clamped or ignored; the
//! configuration itself always stays valid.

use heapless::Vec;

use crate::color::{BLACK, Rgb};
use crate::error::{ConfigError, Param};
use crate::show::{Direction, ShowType, TransitionType};

pub const MIN_SPEED_BPM: u8 = 10;
pub const MAX_SPEED_BPM: u8 = 180;
pub const DEFAULT_SPEED_BPM: u8 = 60;

pub const MIN_SIZE: u8 = 1;
pub const MAX_SIZE: u8 = 200;

pub const MIN_SPLITS: u8 = 1;
pub const MAX_SPLITS: u8 = 10;

/// Fixed capacity of the color step sequence
pub const MAX_COLOR_STEPS: usize = 16;

const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Color step storage
pub type ColorSteps = Vec<Rgb, MAX_COLOR_STEPS>;

fn clamp_u16(param: Param, value: u16, min: u8, max: u8) -> (u8, Result<(), ConfigError>) {
    let clamped = value.clamp(u16::from(min), u16::from(max));
    let result = if clamped == value {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            param,
            value: f32::from(value),
        })
    };
    // Clamped into the u8 domain above
    #[allow(clippy::cast_possible_truncation)]
    (clamped as u8, result)
}

/// Configuration of one show
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    show_type: ShowType,
    speed_bpm: u8,
    size: u8,
    direction: Direction,
    splits: u8,
    transition: TransitionType,
    transition_width: f32,
    color_steps: ColorSteps,
    color_count: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let mut color_steps = ColorSteps::new();
        let _ = color_steps.push(WHITE);
        Self {
            show_type: ShowType::Static,
            speed_bpm: DEFAULT_SPEED_BPM,
            size: MIN_SIZE,
            direction: Direction::LeftRight,
            splits: MIN_SPLITS,
            transition: TransitionType::Both,
            transition_width: 0.0,
            color_steps,
            color_count: 1,
        }
    }
}

impl EngineConfig {
    pub const fn show_type(&self) -> ShowType {
        self.show_type
    }

    pub const fn speed_bpm(&self) -> u8 {
        self.speed_bpm
    }

    pub const fn size(&self) -> u8 {
        self.size
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn splits(&self) -> u8 {
        self.splits
    }

    pub const fn transition(&self) -> TransitionType {
        self.transition
    }

    pub const fn transition_width(&self) -> f32 {
        self.transition_width
    }

    pub const fn color_count(&self) -> u8 {
        self.color_count
    }

    /// All stored steps, including those beyond the color count
    pub fn color_steps(&self) -> &[Rgb] {
        &self.color_steps
    }

    /// Steps the show actually uses: the first `min(color_count, stored)`
    pub fn active_steps(&self) -> &[Rgb] {
        let len = usize::from(self.color_count).min(self.color_steps.len());
        &self.color_steps[..len]
    }

    /// Returns the mismatch if the color count disagrees with the stored steps
    #[allow(clippy::cast_possible_truncation)]
    pub fn color_count_mismatch(&self) -> Option<ConfigError> {
        // Both are bounded by MAX_COLOR_STEPS
        let stored = self.color_steps.len() as u8;
        (stored != self.color_count).then_some(ConfigError::ColorCountMismatch {
            count: self.color_count,
            stored,
        })
    }

    pub fn set_show_type(&mut self, show_type: ShowType) {
        self.show_type = show_type;
    }

    pub fn set_speed(&mut self, bpm: u16) -> Result<(), ConfigError> {
        let (bpm, result) = clamp_u16(Param::Speed, bpm, MIN_SPEED_BPM, MAX_SPEED_BPM);
        self.speed_bpm = bpm;
        result
    }

    pub fn set_size(&mut self, size: u16) -> Result<(), ConfigError> {
        let (size, result) = clamp_u16(Param::Size, size, MIN_SIZE, MAX_SIZE);
        self.size = size;
        result
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn set_splits(&mut self, splits: u16) -> Result<(), ConfigError> {
        let (splits, result) = clamp_u16(Param::Splits, splits, MIN_SPLITS, MAX_SPLITS);
        self.splits = splits;
        result
    }

    pub fn set_transition(&mut self, transition: TransitionType) {
        self.transition = transition;
    }

    /// Set the cross-fade share of a block, NaN is treated as zero
    pub fn set_transition_width(&mut self, width: f32) -> Result<(), ConfigError> {
        let clamped = if width.is_nan() {
            0.0
        } else {
            width.clamp(0.0, 1.0)
        };
        self.transition_width = clamped;
        if clamped.to_bits() == width.to_bits() {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                param: Param::TransitionWidth,
                value: width,
            })
        }
    }

    /// Store a color at a 1-based step number
    ///
    /// Steps past the stored length grow the sequence, gaps are filled with
    /// black. Step 0 is clamped to step 1. Steps past [`MAX_COLOR_STEPS`]
    /// are ignored.
    pub fn set_color_step(&mut self, step: u8, color: Rgb) -> Result<(), ConfigError> {
        if usize::from(step) > MAX_COLOR_STEPS {
            return Err(ConfigError::TooManySteps { step });
        }
        let (index, result) = if step == 0 {
            (
                0,
                Err(ConfigError::OutOfRange {
                    param: Param::ColorStep,
                    value: 0.0,
                }),
            )
        } else {
            (usize::from(step) - 1, Ok(()))
        };
        if index >= self.color_steps.len() {
            // Within capacity, checked above
            let _ = self.color_steps.resize(index + 1, BLACK);
        }
        if let Some(slot) = self.color_steps.get_mut(index) {
            *slot = color;
        }
        result
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn set_color_count(&mut self, count: u8) -> Result<(), ConfigError> {
        let max = MAX_COLOR_STEPS as u8;
        let clamped = count.clamp(1, max);
        self.color_count = clamped;
        if clamped == count {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                param: Param::ColorCount,
                value: f32::from(count),
            })
        }
    }
}
