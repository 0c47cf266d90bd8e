//! HMOVE clock stuffing.
//!
//! A write to HMOVE lets the sprite position counters take up to 15 extra
//! clocks at the start of the next scanline, on top of whatever they get
//! during the visible part of the line. The same window pushes the end of
//! HBLANK back by 8 clocks, which is where the infamous black "comb" on the
//! left of the screen comes from.

/// Extra clocks in one HMOVE window.
pub const STUFFED_CLOCKS: u8 = 15;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hmove {
    /// A write has been seen; takes effect at the next line boundary.
    armed: bool,
    /// The current scanline has an HMOVE window.
    active: bool,
    /// Extra clocks given out so far this window.
    stuffed: u8,
}

impl Hmove {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// HMOVE was written. Nothing changes until the next scanline.
    pub fn trigger(&mut self) {
        self.armed = true;
    }

    /// Line boundary. An armed request becomes this line's window; any
    /// window left over from the previous line is cut short.
    pub fn reset(&mut self) {
        self.active = std::mem::take(&mut self.armed);
        self.stuffed = 0;
    }

    /// One colour clock. Returns the index of the extra clock to stuff, if
    /// any remain.
    pub fn step(&mut self) -> Option<u8> {
        if !self.is_stuffing() {
            return None;
        }
        let ct = self.stuffed;
        self.stuffed += 1;
        Some(ct)
    }

    /// The current scanline has an HMOVE window (late HBLANK).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Extra clocks remain in the window.
    #[must_use]
    pub fn is_stuffing(&self) -> bool {
        self.active && self.stuffed < STUFFED_CLOCKS
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
