//! RSYNC: reset the horizontal sync counter.
//!
//! A write to RSYNC starts a new scanline on the following colour clock,
//! wherever the counter happens to be. Some demos use it to run short
//! scanlines.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rsync {
    pending: bool,
}

impl Rsync {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a reset. A second request before the first is consumed has
    /// no further effect.
    pub fn set(&mut self) {
        self.pending = true;
    }

    /// True if a reset should happen now.
    pub fn tick(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
