//! A television with no outputs.
//!
//! Tracks frames and scanlines exactly as the reference television does,
//! with none of the specification switching, resizing, history or rate
//! limiting. Suited to running a ROM for a fixed number of frames as fast as
//! possible.

use std::fmt;

use emu_core::{Observable, Value};

use crate::error::TvError;
use crate::protocol::StateReq;
use crate::signal::{SignalAttributes, SignalSink};
use crate::specification::{SpecRequest, Specification};
use crate::sync::{Flyback, SyncDecoder};

#[derive(Debug, Clone)]
pub struct HeadlessTelevision {
    spec: &'static Specification,
    decoder: SyncDecoder,
    frame_num: i32,
    synced_frames: i32,
}

impl HeadlessTelevision {
    /// `Auto` is treated as NTSC; a headless television never switches.
    #[must_use]
    pub fn new(request: SpecRequest) -> Self {
        Self {
            spec: request.initial(),
            decoder: SyncDecoder::new(),
            frame_num: 0,
            synced_frames: 0,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &'static Specification {
        self.spec
    }

    #[must_use]
    pub fn get_state(&self, request: StateReq) -> i32 {
        match request {
            StateReq::FrameNum => self.frame_num,
            StateReq::Scanline => self.decoder.scanline(),
            StateReq::HorizPos => self.decoder.horiz_pos() - self.spec.clocks_per_hblank,
        }
    }

    /// Frames that ended with a VSYNC rather than by overrunning.
    #[must_use]
    pub fn synced_frames(&self) -> i32 {
        self.synced_frames
    }

    pub fn reset(&mut self) {
        self.decoder.reset();
        self.frame_num = 0;
        self.synced_frames = 0;
    }
}

impl SignalSink for HeadlessTelevision {
    fn signal(&mut self, sig: SignalAttributes) -> Result<(), TvError> {
        let decoded =
            self.decoder
                .decode(&sig, self.spec.clocks_per_scanline, self.spec.scanlines_total)?;
        if let Some(flyback) = decoded.flyback {
            if flyback == Flyback::Synced {
                self.synced_frames += 1;
            }
            self.decoder.new_frame();
            self.frame_num += 1;
        }
        Ok(())
    }
}

impl fmt::Display for HeadlessTelevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FR={:04} SL={:03} HP={:03}",
            self.frame_num,
            self.decoder.scanline(),
            self.get_state(StateReq::HorizPos)
        )
    }
}

impl Observable for HeadlessTelevision {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "frame" => Some(self.frame_num.into()),
            "scanline" => Some(self.decoder.scanline().into()),
            "horiz_pos" => Some(self.get_state(StateReq::HorizPos).into()),
            "spec" => Some(self.spec.id.to_string().into()),
            "synced_frames" => Some(self.synced_frames.into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &["frame", "scanline", "horiz_pos", "spec", "synced_frames"]
    }
}
