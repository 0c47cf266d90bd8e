//! Reference TIA output.
//!
//! Generates the signal a TIA produces for a scanline whose VSYNC, VBLANK
//! and background colour do not change, with no RSYNC and no HMOVE. Useful
//! for driving a television without a chip and for checking a chip against
//! what the television expects.
//!
//! Colour clocks are counted the way the TIA counts them: the first signal
//! after power-on is clock 1, and clock 0 of every following scanline
//! carries the new-line marker.

use crate::signal::{ColorSignal, SignalAttributes};
use crate::specification::{CLOCKS_PER_HBLANK, CLOCKS_PER_SCANLINE, HSYNC_BACK, HSYNC_FRONT};

/// Colour clock of the colour burst.
pub const COLOR_BURST: i32 = 48;

/// Scanline-level attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    pub vsync: bool,
    pub vblank: bool,
    /// Background colour register value.
    pub color: u8,
}

impl Line {
    /// A VSYNC line. VBLANK is held too, as every kernel does.
    #[must_use]
    pub const fn vsync() -> Self {
        Self {
            vsync: true,
            vblank: true,
            color: 0,
        }
    }

    #[must_use]
    pub const fn blank() -> Self {
        Self {
            vsync: false,
            vblank: true,
            color: 0,
        }
    }

    #[must_use]
    pub const fn picture(color: u8) -> Self {
        Self {
            vsync: false,
            vblank: false,
            color,
        }
    }
}

/// The signal for one colour clock of a line.
#[must_use]
pub fn clock(count: i32, line: Line) -> SignalAttributes {
    SignalAttributes {
        vsync: line.vsync,
        vblank: line.vblank,
        cburst: count == COLOR_BURST,
        hsync: (HSYNC_FRONT..HSYNC_BACK).contains(&count),
        new_line: count == 0,
        pixel: if count < CLOCKS_PER_HBLANK {
            ColorSignal::VideoBlack
        } else {
            ColorSignal::from_register(line.color)
        },
        audio: None,
    }
}

/// Stream of reference signals, tracking the TIA's colour clock.
#[derive(Debug, Clone, Default)]
pub struct SignalPattern {
    count: i32,
}

impl SignalPattern {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The next `n` colour clocks.
    pub fn clocks(&mut self, line: Line, n: usize) -> Vec<SignalAttributes> {
        (0..n)
            .map(|_| {
                self.count = (self.count + 1) % CLOCKS_PER_SCANLINE;
                clock(self.count, line)
            })
            .collect()
    }

    /// A full scanline's worth of colour clocks.
    pub fn scanline(&mut self, line: Line) -> Vec<SignalAttributes> {
        self.clocks(line, CLOCKS_PER_SCANLINE as usize)
    }

    /// Start a new line on the next clock, as a write to RSYNC would.
    pub fn resync(&mut self) {
        self.count = CLOCKS_PER_SCANLINE - 1;
    }
}
