//! DMX output adapter
//!
//! Maps a rendered frame onto DMX channels: the pixel at 0-based offset `k`
//! occupies channels `k*3 + 1`, `k*3 + 2` and `k*3 + 3` (R, G, B). Pixels
//! that do not fit into one universe are dropped.

use crate::OutputDriver;
use crate::color::Rgb;

/// Channels in one DMX universe
pub const DMX_CHANNELS: usize = 512;

/// Pixels that fit into one universe
pub const DMX_MAX_PIXELS: usize = DMX_CHANNELS / 3;

/// Channel-level DMX transmitter
pub trait DmxWriter {
    /// Write one channel value, `channel` is 1-based
    fn write_channel(&mut self, channel: u16, value: u8);
}

/// First (red) channel of the pixel at `offset`, if it fits in a universe
#[allow(clippy::cast_possible_truncation)]
pub const fn pixel_channel(offset: usize) -> Option<u16> {
    if offset >= DMX_MAX_PIXELS {
        return None;
    }
    // At most 510
    Some((offset * 3 + 1) as u16)
}

/// [`OutputDriver`] that writes pixels as RGB channel triples
#[derive(Debug)]
pub struct DmxOutput<W: DmxWriter> {
    writer: W,
}

impl<W: DmxWriter> DmxOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: DmxWriter> OutputDriver for DmxOutput<W> {
    fn write(&mut self, pixels: &[Rgb]) {
        for (offset, pixel) in pixels.iter().enumerate() {
            let Some(channel) = pixel_channel(offset) else {
                break;
            };
            self.writer.write_channel(channel, pixel.r);
            self.writer.write_channel(channel + 1, pixel.g);
            self.writer.write_channel(channel + 2, pixel.b);
        }
    }
}

/// In-memory universe buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmxUniverse {
    channels: [u8; DMX_CHANNELS],
}

impl DmxUniverse {
    pub const fn new() -> Self {
        Self {
            channels: [0; DMX_CHANNELS],
        }
    }

    /// Value of a 1-based channel, zero outside the universe
    pub fn channel(&self, channel: u16) -> u8 {
        usize::from(channel)
            .checked_sub(1)
            .and_then(|index| self.channels.get(index))
            .copied()
            .unwrap_or(0)
    }

    pub const fn as_slice(&self) -> &[u8; DMX_CHANNELS] {
        &self.channels
    }
}

impl Default for DmxUniverse {
    fn default() -> Self {
        Self::new()
    }
}

impl DmxWriter for DmxUniverse {
    fn write_channel(&mut self, channel: u16, value: u8) {
        if let Some(slot) = usize::from(channel)
            .checked_sub(1)
            .and_then(|index| self.channels.get_mut(index))
        {
            *slot = value;
        }
    }
}
