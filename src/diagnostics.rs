//! Log-once error reporting
//!
//! Every error the engine handles locally passes through [`Diagnostics`].
//! Each error kind is latched after its first report so a broken
//! configuration does not flood the log at frame rate.

use core::cell::Cell;

use critical_section::Mutex;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::error::{ConfigError, EngineError, Error};

const KIND_OUT_OF_RANGE: u8 = 1 << 0;
const KIND_COLOR_COUNT_MISMATCH: u8 = 1 << 1;
const KIND_TOO_MANY_STEPS: u8 = 1 << 2;
const KIND_INVALID_PIXEL_QUERY: u8 = 1 << 3;

const fn kind_of(error: &Error) -> u8 {
    match error {
        Error::Config(ConfigError::OutOfRange { .. }) => KIND_OUT_OF_RANGE,
        Error::Config(ConfigError::ColorCountMismatch { .. }) => KIND_COLOR_COUNT_MISMATCH,
        Error::Config(ConfigError::TooManySteps { .. }) => KIND_TOO_MANY_STEPS,
        Error::Engine(EngineError::InvalidPixelQuery { .. }) => KIND_INVALID_PIXEL_QUERY,
    }
}

/// Error latch shared by the engine and its readers
///
/// Reporting only needs `&self`, so color queries stay read-only with
/// respect to the engine and may run from several contexts.
pub struct Diagnostics {
    reported: Mutex<Cell<u8>>,
    last: Mutex<Cell<Option<Error>>>,
}

impl Diagnostics {
    pub const fn new() -> Self {
        Self {
            reported: Mutex::new(Cell::new(0)),
            last: Mutex::new(Cell::new(None)),
        }
    }

    /// Report an error
    ///
    /// Returns `true` if this is the first report of its kind since the
    /// latch was last re-armed (and it was therefore logged).
    pub fn report(&self, error: impl Into<Error>) -> bool {
        let error = error.into();
        let kind = kind_of(&error);
        critical_section::with(|cs| {
            self.last.borrow(cs).set(Some(error));
            let reported = self.reported.borrow(cs);
            let mask = reported.get();
            if mask & kind != 0 {
                return false;
            }
            reported.set(mask | kind);
            #[cfg(feature = "esp32-log")]
            println!("[show-engine] {}", error);
            true
        })
    }

    /// Take the most recent error, if any
    pub fn take_last(&self) -> Option<Error> {
        critical_section::with(|cs| self.last.borrow(cs).take())
    }

    /// Re-arm the color count mismatch latch
    ///
    /// Called whenever the step list or the color count changes, so the
    /// mismatch is logged once per change.
    pub fn rearm_color_count(&self) {
        self.rearm(KIND_COLOR_COUNT_MISMATCH);
    }

    /// Re-arm the out-of-range latch
    ///
    /// Called on every setter call, so each clamped value is logged.
    pub fn rearm_out_of_range(&self) {
        self.rearm(KIND_OUT_OF_RANGE);
    }

    fn rearm(&self, kinds: u8) {
        critical_section::with(|cs| {
            let reported = self.reported.borrow(cs);
            reported.set(reported.get() & !kinds);
        });
    }
}

impl core::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let reported = critical_section::with(|cs| self.reported.borrow(cs).get());
        f.debug_struct("Diagnostics")
            .field("reported", &reported)
            .finish_non_exhaustive()
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}
