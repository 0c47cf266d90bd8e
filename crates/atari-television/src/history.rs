//! Signal history for the current frame.
//!
//! Every signal is recorded with the coordinates it was drawn at. The write
//! cursor rewinds at each new frame but the entries are kept, so after a
//! restore the previous frame's tail is still available to redraw
//! everything the current frame has not reached yet.

use crate::error::TvError;
use crate::signal::SignalAttributes;
use crate::specification::Specification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub x: i32,
    pub y: i32,
    pub sig: SignalAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    capacity: usize,
}

impl SignalHistory {
    /// History big enough for one frame of `spec`, with a scanline to spare
    /// for the HSYNC realignment at power-on.
    #[must_use]
    pub fn for_spec(spec: &Specification) -> Self {
        let capacity = (spec.clocks_per_scanline * (spec.scanlines_total + 2)) as usize;
        Self {
            entries: Vec::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    pub fn record(&mut self, entry: HistoryEntry) -> Result<(), TvError> {
        if let Some(slot) = self.entries.get_mut(self.cursor) {
            *slot = entry;
        } else if self.entries.len() < self.capacity {
            self.entries.push(entry);
        } else {
            return Err(TvError::protocol(format!(
                "signal history exhausted after {} signals in one frame",
                self.capacity
            )));
        }
        self.cursor += 1;
        Ok(())
    }

    /// Start overwriting from the beginning.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries paired with whether the current frame has yet to reach them.
    pub fn replay(&self) -> impl Iterator<Item = (&HistoryEntry, bool)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry, i >= self.cursor))
    }

    /// Re-reserve the full frame after the history has been cloned or
    /// deserialised, so recording never reallocates mid-frame.
    pub fn reserve(&mut self) {
        let additional = self.capacity.saturating_sub(self.entries.len());
        self.entries.reserve_exact(additional);
    }
}
