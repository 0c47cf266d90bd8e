//! The TIA's video objects.
//!
//! Sprites, missiles, the ball and the playfield are driven by the chip's
//! clock but are not part of its timing. The chip talks to them through
//! [`VideoCircuit`], in a fixed order every colour clock.

use crate::registers::Register;

/// Video objects as seen by the chip.
pub trait VideoCircuit {
    /// A scanline has started.
    fn new_scanline(&mut self);

    /// HMOVE was written. Called before the move window is armed.
    fn prepare_for_hmove(&mut self);

    /// One stuffed clock. `count` is the index of the extra clock within
    /// the HMOVE window (0-14). Called during HBLANK.
    fn tick_for_hmove(&mut self, count: u8);

    /// One ordinary clock for the position counters. Never called during
    /// HBLANK.
    fn tick_sprites(&mut self);

    fn tick_playfield(&mut self);

    /// Resolve writes scheduled for this clock. `motion_clock` is the
    /// out-of-phase clock used for delayed position resets.
    fn tick_futures(&mut self, motion_clock: bool);

    /// Colour register value of the pixel at the current clock.
    fn pixel(&self) -> u8;

    /// A write to a register the chip doesn't handle itself.
    fn write(&mut self, register: Register, value: u8);
}

/// A video circuit with nothing on it but the background colour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Backdrop {
    colubk: u8,
}

impl Backdrop {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn colubk(&self) -> u8 {
        self.colubk
    }
}

impl VideoCircuit for Backdrop {
    fn new_scanline(&mut self) {}

    fn prepare_for_hmove(&mut self) {}

    fn tick_for_hmove(&mut self, _count: u8) {}

    fn tick_sprites(&mut self) {}

    fn tick_playfield(&mut self) {}

    fn tick_futures(&mut self, _motion_clock: bool) {}

    fn pixel(&self) -> u8 {
        self.colubk
    }

    fn write(&mut self, register: Register, value: u8) {
        if register == Register::Colubk {
            self.colubk = value;
        }
    }
}
