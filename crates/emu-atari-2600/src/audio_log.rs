//! An audio mixer that only keeps track of what it was sent.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use atari_television::{AudioData, AudioMixer, TvError};
use log::debug;
use serde::Serialize;

/// Audio register writes seen by the television.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AudioSummary {
    pub writes: u32,
    pub last: Option<AudioData>,
}

/// Shared handle on an [`AudioSummary`]; one clone goes to the television.
#[derive(Debug, Clone, Default)]
pub struct AudioLog(Rc<RefCell<AudioSummary>>);

impl AudioLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn summary(&self) -> Ref<'_, AudioSummary> {
        self.0.borrow()
    }
}

impl AudioMixer for AudioLog {
    fn set_audio(&mut self, audio: AudioData) -> Result<(), TvError> {
        let mut summary = self.0.borrow_mut();
        summary.writes += 1;
        summary.last = Some(audio);
        Ok(())
    }

    fn end_mixing(&mut self) -> Result<(), TvError> {
        let summary = self.0.borrow();
        debug!("audio: {} register updates, last {:?}", summary.writes, summary.last);
        Ok(())
    }
}
