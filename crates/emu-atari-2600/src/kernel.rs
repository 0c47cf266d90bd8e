//! A scripted display kernel.
//!
//! Stands in for a 6507 running a cartridge: it makes the register writes a
//! simple game kernel makes, one store instruction at a time, and ends every
//! scanline with WSYNC. The frame is the classic layout of VSYNC, VBLANK,
//! picture and overscan, with a band of colours for the picture.

use std::collections::VecDeque;

use atari_tia::{Register, SYNC_MASK};

use crate::config::KernelConfig;

/// CPU cycles per store (STA zero page).
const CYCLES_PER_WRITE: u32 = 3;

/// Picture lines per colour band.
const BAND_LINES: u32 = 4;

#[derive(Debug, Clone)]
pub struct Kernel {
    config: KernelConfig,
    /// Scanline within the frame.
    line: u32,
    frame: u32,
    /// Writes still to make on this line, before the WSYNC.
    pending: VecDeque<(Register, u8)>,
    /// Cycles into the current instruction.
    cycles: u32,
}

impl Kernel {
    #[must_use]
    pub fn new(config: KernelConfig) -> Self {
        let mut kernel = Self {
            config,
            line: 0,
            frame: 0,
            pending: VecDeque::new(),
            cycles: 0,
        };
        kernel.pending = kernel.line_writes();
        kernel
    }

    #[must_use]
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// One CPU cycle. Returns the register write made on this cycle, if
    /// any.
    pub fn cycle(&mut self) -> Option<(Register, u8)> {
        self.cycles += 1;
        if self.cycles < CYCLES_PER_WRITE {
            return None;
        }
        self.cycles = 0;

        if let Some(write) = self.pending.pop_front() {
            return Some(write);
        }
        self.next_line();
        Some((Register::Wsync, 0))
    }

    fn next_line(&mut self) {
        self.line += 1;
        if self.line == self.config.total_lines() {
            self.line = 0;
            self.frame += 1;
        }
        self.pending = self.line_writes();
    }

    /// Background colour for a picture line.
    #[must_use]
    pub fn band_color(&self, picture_line: u32) -> u8 {
        let step = ((picture_line / BAND_LINES) * 2) as u8;
        self.config.base_color.wrapping_add(step) & 0xFE
    }

    fn line_writes(&self) -> VecDeque<(Register, u8)> {
        let c = &self.config;
        let top = c.vsync_lines + c.vblank_lines;
        let bottom = top + c.picture_lines;
        let mut writes = VecDeque::new();

        if self.line == 0 {
            writes.push_back((Register::Vsync, SYNC_MASK));
            writes.push_back((Register::Vblank, SYNC_MASK));
        }
        if self.line == c.vsync_lines {
            writes.push_back((Register::Vsync, 0));
        }
        if self.line == top {
            writes.push_back((Register::Vblank, 0));
        }
        if (top..bottom).contains(&self.line) {
            writes.push_back((Register::Colubk, self.band_color(self.line - top)));
            if c.hmove {
                writes.push_back((Register::Hmove, 0));
            }
        }
        if self.line == bottom {
            writes.push_back((Register::Vblank, SYNC_MASK));
            writes.push_back((Register::Colubk, 0));
            // A tone that changes pitch every frame
            writes.push_back((Register::Audc0, 0x04));
            writes.push_back((Register::Audf0, (self.frame & 0x1F) as u8));
            writes.push_back((Register::Audv0, 0x08));
        }
        writes
    }
}
