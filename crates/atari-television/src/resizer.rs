//! Screen geometry detection.
//!
//! The visible window of a frame is taken from VBLANK: the first falling
//! edge is the top, the last rising edge is the bottom. Kernels are not
//! always consistent from one frame to the next, particularly while a game
//! is setting up, so a new geometry must be seen on consecutive frames
//! before it replaces the committed one.

use log::debug;

use crate::signal::SignalAttributes;
use crate::specification::Specification;

/// Top and bottom scanlines of the visible window. `bottom` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub top: i32,
    pub bottom: i32,
}

impl Geometry {
    /// The specification's ideal visible window.
    #[must_use]
    pub const fn ideal(spec: &Specification) -> Self {
        Self {
            top: spec.scanline_top(),
            bottom: spec.scanline_bottom(),
        }
    }

    #[must_use]
    pub const fn visible_scanlines(&self) -> i32 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resizer {
    committed: Geometry,
    /// First VBLANK falling edge of the frame in progress.
    vblank_off: Option<i32>,
    /// Last VBLANK rising edge of the frame in progress.
    vblank_on: Option<i32>,
    last_vblank: bool,
    /// Geometry observed on the previous frame.
    previous: Option<Geometry>,
    /// Consecutive frames that repeated the previous observation.
    run: u32,
}

impl Resizer {
    #[must_use]
    pub fn new(committed: Geometry) -> Self {
        Self {
            committed,
            vblank_off: None,
            vblank_on: None,
            last_vblank: false,
            previous: None,
            run: 0,
        }
    }

    #[must_use]
    pub fn committed(&self) -> Geometry {
        self.committed
    }

    /// Look at a signal on `scanline` for VBLANK edges.
    pub fn examine(&mut self, sig: &SignalAttributes, scanline: i32, spec: &Specification) {
        if !sig.vblank && self.last_vblank && self.vblank_off.is_none() {
            self.vblank_off = Some(scanline);
        }
        if sig.vblank && !self.last_vblank {
            // VBLANK turned on as the frame starts belongs to the end of the
            // previous frame
            self.vblank_on = Some(if scanline == 0 {
                spec.scanlines_total
            } else {
                scanline
            });
        }
        self.last_vblank = sig.vblank;
    }

    /// Clear the observations ready for a new frame.
    pub fn prepare(&mut self) {
        self.vblank_off = None;
        self.vblank_on = None;
    }

    /// End-of-frame bookkeeping. Returns the new geometry when it has been
    /// seen on more than `threshold` consecutive frames and differs from the
    /// committed one.
    pub fn commit(&mut self, threshold: u32) -> Option<Geometry> {
        let observed = match (self.vblank_off, self.vblank_on) {
            (Some(top), Some(bottom)) if bottom > top => Some(Geometry { top, bottom }),
            _ => None,
        };

        match observed {
            Some(g) if self.previous == Some(g) => self.run = self.run.saturating_add(1),
            _ => self.run = 0,
        }
        self.previous = observed;

        let g = observed?;
        if self.run < threshold || g == self.committed {
            return None;
        }
        debug!(
            "resize: top={} bottom={} after {} frames",
            g.top,
            g.bottom,
            self.run + 1
        );
        self.committed = g;
        Some(g)
    }
}
