//! Sync decoding shared by every television.
//!
//! The decoder turns the stream of signals into a beam position. It knows
//! nothing about renderers or specifications beyond the two numbers it is
//! handed per signal, so every television variant can drive its own
//! side-effects from the same decoded result.
//!
//! Horizontal position counts from the start of HBLANK. Reaching the end of
//! the scanline (or receiving the TIA's new-line marker early, which happens
//! when RSYNC shortens a line) starts a new scanline. HSYNC edges then pull
//! the position back into step: the front of the pulse is always position
//! 16 and the back is always position 32.
//!
//! VSYNC is measured in scanlines rather than colour clocks: each HSYNC
//! rising edge seen while VSYNC is (or was, on the previous clock) asserted
//! counts one line. A falling VSYNC edge after at least one such line is a
//! synced flyback.

use crate::error::TvError;
use crate::signal::SignalAttributes;
use crate::specification::{HSYNC_BACK, HSYNC_FRONT};

/// Nominal HSYNC pulse width in colour clocks.
const HSYNC_WIDTH: i32 = HSYNC_BACK - HSYNC_FRONT;

/// Why a frame ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flyback {
    /// The scanline count overran the limit without a VSYNC.
    Natural,
    /// A valid VSYNC pulse ended.
    Synced,
}

/// What a single signal did to the beam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decoded {
    /// The signal started a new scanline.
    pub line_started: bool,
    /// The signal ended the frame. VSYNC takes priority over a natural
    /// flyback in the same signal.
    pub flyback: Option<Flyback>,
}

impl Decoded {
    /// Whether renderers should be told about a new scanline.
    #[must_use]
    pub fn new_scanline(&self) -> bool {
        self.line_started && self.flyback.is_none()
    }
}

/// Beam position recovered from sync signals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncDecoder {
    horiz_pos: i32,
    scanline: i32,
    last_signal: SignalAttributes,
    /// Lines for which VSYNC has been held.
    vsync_count: i32,
    /// Colour clocks since the last new-line marker. `None` until the first
    /// marker is seen.
    since_new_line: Option<i32>,
    /// Colour clocks HSYNC has been held.
    hsync_clocks: i32,
}

impl SyncDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current horizontal position, measured from the start of HBLANK.
    #[must_use]
    pub fn horiz_pos(&self) -> i32 {
        self.horiz_pos
    }

    #[must_use]
    pub fn scanline(&self) -> i32 {
        self.scanline
    }

    #[must_use]
    pub fn last_signal(&self) -> SignalAttributes {
        self.last_signal
    }

    #[must_use]
    pub fn vsync_count(&self) -> i32 {
        self.vsync_count
    }

    /// Forget everything; the next signal is the first.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Start the next frame at scanline zero. The horizontal position is
    /// left alone: a VSYNC can end mid-line.
    pub fn new_frame(&mut self) {
        self.scanline = 0;
    }

    /// Pull the scanline back within `flyback_limit`, after a change of
    /// specification. The next new line then overruns into a natural
    /// flyback.
    pub fn clamp_scanline(&mut self, flyback_limit: i32) {
        self.scanline = self.scanline.min(flyback_limit);
    }

    /// Advance the beam by one signal.
    ///
    /// `flyback_limit` is the last scanline before a natural flyback.
    pub fn decode(
        &mut self,
        sig: &SignalAttributes,
        clocks_per_scanline: i32,
        flyback_limit: i32,
    ) -> Result<Decoded, TvError> {
        let mut decoded = Decoded::default();
        let last = self.last_signal;

        self.since_new_line = if sig.new_line {
            Some(0)
        } else {
            self.since_new_line.map(|n| n + 1)
        };

        self.horiz_pos += 1;
        if self.horiz_pos >= clocks_per_scanline || sig.new_line {
            self.horiz_pos = 0;
            self.scanline += 1;
            decoded.line_started = true;
            if self.scanline > flyback_limit {
                decoded.flyback = Some(Flyback::Natural);
            }
        }

        if sig.vsync && !last.vsync {
            self.vsync_count = 0;
        } else if !sig.vsync && last.vsync && self.vsync_count > 0 {
            decoded.flyback = Some(Flyback::Synced);
        }

        if sig.hsync && !last.hsync {
            if let Some(n) = self.since_new_line
                && n != HSYNC_FRONT
            {
                return Err(TvError::protocol(format!(
                    "HSYNC on {n} clocks into the scanline (expected {HSYNC_FRONT})"
                )));
            }
            self.horiz_pos = HSYNC_FRONT;
            self.hsync_clocks = 0;
            if sig.vsync || last.vsync {
                self.vsync_count += 1;
            }
        }
        if sig.hsync {
            self.hsync_clocks += 1;
            if self.hsync_clocks > HSYNC_WIDTH {
                return Err(TvError::protocol(format!(
                    "HSYNC held for more than {HSYNC_WIDTH} clocks"
                )));
            }
        } else if last.hsync {
            self.horiz_pos = HSYNC_BACK;
        }

        self.last_signal = *sig;
        Ok(decoded)
    }
}
